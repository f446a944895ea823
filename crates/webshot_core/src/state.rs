use crate::{FailedItem, Progress, RunResult, WorkItem};

/// Mutable state for a single run.
///
/// Owned and mutated only by the runner's control flow, which joins item
/// completions one at a time; updates are therefore serialized without a
/// lock even though the items themselves run concurrently.
pub(crate) struct RunState {
    total_items: usize,
    processed_count: usize,
    failed_items: Vec<FailedItem>,
}

impl RunState {
    pub(crate) fn new(total_items: usize) -> Self {
        Self {
            total_items,
            processed_count: 0,
            failed_items: Vec::new(),
        }
    }

    /// Counts a successful item and returns the matching observation.
    pub(crate) fn record_success(&mut self) -> Progress {
        self.processed_count += 1;
        Progress::new(self.processed_count, self.total_items)
    }

    /// Counts a failed item, records its cause, and returns the matching
    /// observation. Failures count toward progress exactly like successes.
    pub(crate) fn record_failure(&mut self, item: WorkItem, error: String) -> Progress {
        self.processed_count += 1;
        self.failed_items.push(FailedItem { item, error });
        Progress::new(self.processed_count, self.total_items)
    }

    pub(crate) fn into_result(self) -> RunResult {
        RunResult {
            total_items: self.total_items,
            processed_count: self.processed_count,
            failed_items: self.failed_items,
        }
    }
}
