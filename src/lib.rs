pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod linkedin_oauth;
pub mod service;
pub mod types;

pub use error::JobsError;
pub use linkedin_oauth::{LinkedInCredential, LinkedInOauthService};
pub use service::JobSearch;
