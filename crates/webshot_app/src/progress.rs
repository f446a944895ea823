//! Progress reporting for the terminal.

use shot_logging::shot_info;
use webshot_core::{Progress, ProgressSink};

/// Prints one `Progress: <pct>% (<processed>/<total>)` line per completed
/// item through the logging facade.
#[derive(Debug, Default)]
pub struct LogProgressSink;

impl ProgressSink for LogProgressSink {
    fn emit(&self, progress: Progress) {
        shot_info!(
            "Progress: {:.2}% ({}/{})",
            progress.percent,
            progress.processed,
            progress.total
        );
    }
}
