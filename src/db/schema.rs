//! SQL DDL for the result cache.

/// Append-only log of result sets; only the highest `id` is ever read.
/// `results` holds a JSON array of job records.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS job_search_results (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    results TEXT NOT NULL
);
"#;
