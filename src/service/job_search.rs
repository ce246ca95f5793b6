use crate::api::JobsApi;
use crate::db::JobCacheStorage;
use crate::error::JobsError;
use crate::linkedin_oauth::LinkedInCredential;
use crate::types::job::JobRecord;
use tracing::{info, warn};

/// Fetch-or-use-cache flow over the jobs endpoint and the result table.
pub struct JobSearch {
    http: reqwest::Client,
    api: JobsApi,
    storage: JobCacheStorage,
}

impl JobSearch {
    pub fn new(http: reqwest::Client, api: JobsApi, storage: JobCacheStorage) -> Self {
        Self { http, api, storage }
    }

    /// Return the latest cached result set, or fetch, cache and return a fresh one.
    ///
    /// A cache hit is returned whatever its age and no request is made.
    pub async fn search_jobs(
        &self,
        credential: &LinkedInCredential,
    ) -> Result<Vec<JobRecord>, JobsError> {
        if let Some(cached) = self.storage.latest().await? {
            let records = cached.records()?;
            info!(id = cached.id, count = records.len(), "Serving cached result set");
            return Ok(records);
        }

        info!("No cached result set; querying jobs endpoint");
        let records = self
            .api
            .search(&self.http, credential.bearer())
            .await
            .inspect_err(|e| warn!(error = %e, "jobs search failed"))?;
        let id = self.storage.insert(&records).await?;
        info!(id, count = records.len(), "Result set stored");
        Ok(records)
    }
}
