use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use tokio::sync::Barrier;
use webshot_core::{BatchOperation, BatchRunner, NullProgressSink, OperationError, WorkItem};

fn items(n: usize) -> Vec<WorkItem> {
    (0..n).map(|i| format!("item-{i:02}")).collect()
}

fn runner(limit: usize) -> BatchRunner {
    BatchRunner::new(NonZeroUsize::new(limit).unwrap())
}

/// Operation instrumented with an in-flight gauge and a per-invocation
/// snapshot of which items had already completed when it started.
struct GaugeOp {
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    completed: Mutex<HashSet<WorkItem>>,
    start_snapshots: Mutex<Vec<(WorkItem, HashSet<WorkItem>)>>,
    start_order: Mutex<Vec<WorkItem>>,
    delay_for: fn(&WorkItem) -> Duration,
}

impl GaugeOp {
    fn new(delay_for: fn(&WorkItem) -> Duration) -> Self {
        Self {
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            completed: Mutex::new(HashSet::new()),
            start_snapshots: Mutex::new(Vec::new()),
            start_order: Mutex::new(Vec::new()),
            delay_for,
        }
    }
}

#[async_trait::async_trait]
impl BatchOperation for GaugeOp {
    async fn execute(&self, item: &WorkItem) -> Result<(), OperationError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        {
            let done = self.completed.lock().unwrap().clone();
            self.start_snapshots.lock().unwrap().push((item.clone(), done));
            self.start_order.lock().unwrap().push(item.clone());
        }

        tokio::time::sleep((self.delay_for)(item)).await;

        self.completed.lock().unwrap().insert(item.clone());
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(())
    }
}

fn uniform_delay(_item: &WorkItem) -> Duration {
    Duration::from_millis(5)
}

#[tokio::test]
async fn in_flight_work_never_exceeds_the_limit() {
    shot_logging::initialize_for_tests();
    let input = items(25);
    let op = GaugeOp::new(uniform_delay);
    runner(10).run(&input, &op, &NullProgressSink).await;

    assert!(op.max_in_flight.load(Ordering::SeqCst) <= 10);
}

#[tokio::test]
async fn limit_of_one_is_strictly_sequential() {
    let input = items(8);
    let op = GaugeOp::new(uniform_delay);
    runner(1).run(&input, &op, &NullProgressSink).await;

    assert_eq!(op.max_in_flight.load(Ordering::SeqCst), 1);
    // With one-item batches the dispatch order is the input order.
    assert_eq!(*op.start_order.lock().unwrap(), input);
}

#[tokio::test]
async fn next_batch_starts_only_after_previous_batch_drains() {
    let input = items(25);
    // Uneven durations inside each batch to force interleaved completions.
    fn staggered(item: &WorkItem) -> Duration {
        let idx: u64 = item
            .rsplit('-')
            .next()
            .and_then(|s| s.parse().ok())
            .unwrap_or(0);
        Duration::from_millis(1 + (idx % 10) * 3)
    }
    let op = GaugeOp::new(staggered);
    runner(10).run(&input, &op, &NullProgressSink).await;

    // Batches are [00..10), [10..20), [20..25): any item of a later batch
    // must observe every item of all earlier batches as already completed
    // when it starts.
    let snapshots = op.start_snapshots.lock().unwrap();
    assert_eq!(snapshots.len(), 25);
    for (item, done_at_start) in snapshots.iter() {
        let idx: usize = item.rsplit('-').next().unwrap().parse().unwrap();
        let earlier_batches = (idx / 10) * 10;
        for prior in 0..earlier_batches {
            let prior_item = format!("item-{prior:02}");
            assert!(
                done_at_start.contains(&prior_item),
                "{item} started before {prior_item} completed"
            );
        }
    }
}

/// Operation that only completes once every sibling in its batch has
/// started, proving the batch really fans out concurrently.
struct BarrierOp {
    barrier: Barrier,
}

#[async_trait::async_trait]
impl BatchOperation for BarrierOp {
    async fn execute(&self, _item: &WorkItem) -> Result<(), OperationError> {
        self.barrier.wait().await;
        Ok(())
    }
}

#[tokio::test]
async fn limit_larger_than_input_forms_a_single_concurrent_batch() {
    let input = items(7);
    let op = BarrierOp {
        barrier: Barrier::new(7),
    };

    // Deadlocks (and times out) unless all seven items are in flight at once.
    let result = tokio::time::timeout(
        Duration::from_secs(5),
        runner(50).run(&input, &op, &NullProgressSink),
    )
    .await
    .expect("all items of a single batch must run concurrently");

    assert_eq!(result.processed_count, 7);
    assert!(result.failed_items.is_empty());
}
