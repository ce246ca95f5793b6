use crate::types::job::JobRecord;
use sqlx::FromRow;

/// One persisted result set.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct CachedResultSet {
    pub id: i64,
    pub results: String,
}

impl CachedResultSet {
    pub fn records(&self) -> Result<Vec<JobRecord>, serde_json::Error> {
        serde_json::from_str(&self.results)
    }
}

pub fn serialize_records(records: &[JobRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string(records)
}
