use std::num::NonZeroUsize;

use futures_util::stream::{FuturesUnordered, StreamExt};

use crate::state::RunState;
use crate::{OperationError, ProgressSink, RunResult, WorkItem};

/// The opaque unit of work applied to each item.
///
/// Implementations own whatever shared resource they need (a browser
/// session, an HTTP client); the runner only shares the operation
/// immutably across the in-flight invocations of one batch.
#[async_trait::async_trait]
pub trait BatchOperation: Send + Sync {
    async fn execute(&self, item: &WorkItem) -> Result<(), OperationError>;
}

/// Drives an ordered item list to completion with bounded parallelism.
///
/// Items are split into contiguous batches of `concurrency_limit`; batches
/// run strictly in input order, and each batch is joined in full before the
/// next one starts. The batch size is the entire backpressure mechanism:
/// at most `concurrency_limit` operations are ever in flight.
#[derive(Debug, Clone, Copy)]
pub struct BatchRunner {
    concurrency_limit: NonZeroUsize,
}

impl BatchRunner {
    pub fn new(concurrency_limit: NonZeroUsize) -> Self {
        Self { concurrency_limit }
    }

    pub fn concurrency_limit(&self) -> NonZeroUsize {
        self.concurrency_limit
    }

    /// Runs `operation` over every item, exactly once per item.
    ///
    /// Every item reaches a terminal outcome: a success or a recorded
    /// failure. A failing item never aborts or delays its siblings; the
    /// run itself cannot fail. One observation is emitted to `sink` per
    /// completed item, in completion order (which may differ from input
    /// order within a batch). An empty item list completes immediately
    /// with no operation invocations and no observations.
    pub async fn run(
        &self,
        items: &[WorkItem],
        operation: &dyn BatchOperation,
        sink: &dyn ProgressSink,
    ) -> RunResult {
        let mut state = RunState::new(items.len());

        for batch in items.chunks(self.concurrency_limit.get()) {
            let mut in_flight: FuturesUnordered<_> = batch
                .iter()
                .map(|item| async move { (item, operation.execute(item).await) })
                .collect();

            // Join barrier: drain the whole batch before the next starts.
            while let Some((item, outcome)) = in_flight.next().await {
                let progress = match outcome {
                    Ok(()) => state.record_success(),
                    Err(error) => {
                        log::warn!("Failed to process {item}: {error}");
                        state.record_failure(item.clone(), error.to_string())
                    }
                };
                sink.emit(progress);
            }
        }

        state.into_result()
    }
}
