use crate::config::Config;
use crate::error::JobsError;
use crate::types::job::{JobRecord, records_from_slice};
use reqwest::header::{ACCEPT_LANGUAGE, CONTENT_TYPE};
use tracing::{debug, info};
use url::Url;

/// Jobs search endpoint: one authenticated GET with a fixed field projection.
#[derive(Debug, Clone)]
pub struct JobsApi {
    url: Url,
    fields: String,
    accept_language: String,
}

impl JobsApi {
    pub fn new(url: Url, fields: impl Into<String>, accept_language: impl Into<String>) -> Self {
        Self {
            url,
            fields: fields.into(),
            accept_language: accept_language.into(),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            cfg.jobs_url.clone(),
            cfg.job_fields.clone(),
            cfg.accept_language.clone(),
        )
    }

    /// Fetch one page of listings and flatten every element into a record.
    pub async fn search(
        &self,
        client: &reqwest::Client,
        token: impl AsRef<str>,
    ) -> Result<Vec<JobRecord>, JobsError> {
        let resp = client
            .get(self.url.clone())
            .bearer_auth(token.as_ref())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT_LANGUAGE, self.accept_language.as_str())
            .query(&[("fields", self.fields.as_str())])
            .send()
            .await?
            .error_for_status()?;
        let body = resp.bytes().await?;
        debug!(bytes = body.len(), "jobs search response received");

        let records = records_from_slice(&body)?;
        info!(count = records.len(), "Jobs search completed");
        Ok(records)
    }
}
