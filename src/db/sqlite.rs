use crate::db::models::{CachedResultSet, serialize_records};
use crate::db::schema::SQLITE_INIT;
use crate::error::JobsError;
use crate::types::job::JobRecord;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::debug;

pub type SqlitePool = Pool<Sqlite>;

/// Open (creating if missing) the SQLite database and apply the schema.
pub async fn connect(database_url: &str) -> Result<JobCacheStorage, JobsError> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(connect_opts)
        .await?;
    let storage = JobCacheStorage::new(pool);
    storage.init_schema().await?;
    Ok(storage)
}

#[derive(Clone)]
pub struct JobCacheStorage {
    pool: SqlitePool,
}

impl JobCacheStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), JobsError> {
        // sqlx::query runs one statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// The most recently inserted result set, if any.
    pub async fn latest(&self) -> Result<Option<CachedResultSet>, JobsError> {
        let row = sqlx::query_as::<_, CachedResultSet>(
            "SELECT id, results FROM job_search_results ORDER BY id DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Append one result set as a JSON blob. Returns the row id.
    pub async fn insert(&self, records: &[JobRecord]) -> Result<i64, JobsError> {
        let blob = serialize_records(records)?;
        let id = sqlx::query("INSERT INTO job_search_results (results) VALUES (?)")
            .bind(blob)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();
        debug!(id, count = records.len(), "result set cached");
        Ok(id)
    }

    pub async fn count(&self) -> Result<i64, JobsError> {
        let rec: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM job_search_results")
            .fetch_one(&self.pool)
            .await?;
        Ok(rec.0)
    }
}
