//! Database module: the job search result cache.
//!
//! Layout:
//! - `models.rs`: row struct and blob (de)serialization
//! - `schema.rs`: SQL DDL for initializing the database
//! - `sqlite.rs`: the two cache statements over a sqlx SQLite pool

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::CachedResultSet;
pub use schema::SQLITE_INIT;
pub use sqlite::{JobCacheStorage, SqlitePool, connect};
