//! Pipeline orchestration and summary reporting

pub mod coordinator;
pub mod summary;

pub use coordinator::PipelineCoordinator;
pub use summary::{FetchFailure, RunSummary};
