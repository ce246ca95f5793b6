pub mod job;
pub mod table;

pub use job::JobRecord;
pub use table::JobTable;
