pub mod job_search;

pub use job_search::JobSearch;
