//! Webshot core: bounded-concurrency batch execution.
//!
//! Drives an ordered list of work items to completion in fixed-size batches,
//! invoking an opaque per-item operation concurrently within each batch and
//! joining the whole batch before the next one starts. The core tracks a
//! progress counter and aggregates per-item failures; it knows nothing about
//! browsers, files, or any other collaborator behind the operation.
mod progress;
mod runner;
mod source;
mod state;
mod types;

pub use progress::{NullProgressSink, Progress, ProgressSink};
pub use runner::{BatchOperation, BatchRunner};
pub use source::parse_work_items;
pub use types::{FailedItem, OperationError, RunResult, WorkItem};
