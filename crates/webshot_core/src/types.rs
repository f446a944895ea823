use std::fmt;

/// One unit of input to be processed. The core treats it as an opaque,
/// stringifiable identifier; in the webshot domain it is a URL.
pub type WorkItem = String;

/// Opaque failure reported by an operation for a single item.
///
/// A per-item failure is an expected outcome, not a defect: the runner
/// records it and moves on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationError {
    message: String,
}

impl OperationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for OperationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// A work item that failed, paired with a human-readable cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedItem {
    pub item: WorkItem,
    pub error: String,
}

/// Final summary of a run.
///
/// Invariant: `processed_count == total_items` once the run has drained,
/// and `failed_items` holds exactly the items whose operation failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub total_items: usize,
    pub processed_count: usize,
    pub failed_items: Vec<FailedItem>,
}
