pub mod jobs_api;

pub use jobs_api::JobsApi;
