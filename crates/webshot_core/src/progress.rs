/// One progress observation, emitted after each item reaches a terminal
/// outcome. `percent` is `processed / total * 100` rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub processed: usize,
    pub total: usize,
    pub percent: f64,
}

impl Progress {
    /// Builds an observation for `processed` completed items out of `total`.
    ///
    /// Callers must not construct progress for an empty run; the runner
    /// never emits any observation when `total == 0`.
    pub fn new(processed: usize, total: usize) -> Self {
        debug_assert!(total > 0, "progress is never observed for empty runs");
        let ratio = processed as f64 / total as f64;
        let percent = (ratio * 100.0 * 100.0).round() / 100.0;
        Self {
            processed,
            total,
            percent,
        }
    }
}

/// Receiver for progress observations.
///
/// The runner calls `emit` synchronously at the batch join, immediately
/// after incrementing its counter, so an observation is always consistent
/// with the counter it was derived from. Emissions are serialized and
/// arrive in completion order.
pub trait ProgressSink: Send + Sync {
    fn emit(&self, progress: Progress);
}

/// Sink that discards all observations.
#[derive(Debug, Default)]
pub struct NullProgressSink;

impl ProgressSink for NullProgressSink {
    fn emit(&self, _progress: Progress) {}
}
