#![allow(dead_code)]

use linkedin_jobs::config::Config;
use linkedin_jobs::db::{self, JobCacheStorage};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use url::Url;

pub struct TempDb {
    pub path: PathBuf,
    pub storage: JobCacheStorage,
}

impl TempDb {
    pub async fn new(tag: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();

        let mut path = std::env::temp_dir();
        path.push(format!(
            "linkedin-jobs-{tag}-{}-{}.sqlite",
            std::process::id(),
            nanos
        ));

        let database_url = format!("sqlite:{}", path.display());
        let storage = db::connect(&database_url)
            .await
            .expect("failed to open temp sqlite database");
        Self { path, storage }
    }
}

impl Drop for TempDb {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

/// Config whose endpoints all point at a local mock server.
pub fn mock_config(server_url: &str) -> Config {
    let base = Url::parse(server_url).expect("mock server url");
    Config {
        client_id: "client-abc".to_string(),
        client_secret: "secret-xyz".to_string(),
        auth_url: base.join("/oauth/v2/authorization").unwrap(),
        token_url: base.join("/oauth/v2/accessToken").unwrap(),
        jobs_url: base.join("/v2/jobs").unwrap(),
        oauth_state: Some("fixed-state".to_string()),
        ..Config::default()
    }
}
