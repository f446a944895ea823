//! webshot: capture screenshots for a list of URLs with bounded parallelism.

mod input;
mod logging;
mod progress;

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use shot_logging::{shot_error, shot_info, shot_warn};
use webshot_core::{BatchRunner, WorkItem};
use webshot_engine::{
    ensure_output_dir, write_failed_items, BrowserSession, CaptureOperation, CaptureSettings,
    ChromiumRenderer,
};

const DEFAULT_CONCURRENCY: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(limit) => limit,
    None => unreachable!(),
};

#[derive(Parser, Debug)]
#[command(name = "webshot", about = "Capture screenshots of a list of URLs")]
struct Cli {
    /// Newline-delimited URL listing to process.
    #[arg(long, default_value = "urls.txt")]
    input: PathBuf,
    /// Directory the JPEG artifacts are written to.
    #[arg(long, default_value = "screenshots")]
    output_dir: PathBuf,
    /// Maximum number of captures in flight at once.
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
    concurrency: NonZeroUsize,
    /// Per-page navigation timeout in seconds.
    #[arg(long, default_value_t = 60)]
    timeout_secs: u64,
    /// JPEG compression quality (1-100).
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: u8,
    /// Where to write the identifiers of failed URLs for a retry pass.
    #[arg(long, default_value = "failed_urls.txt")]
    failed_list: PathBuf,
    /// Also write logs to ./webshot.log.
    #[arg(long)]
    log_file: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::initialize(cli.log_file);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            shot_error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

#[tokio::main]
async fn run(cli: Cli) -> anyhow::Result<()> {
    let items = input::read_work_items(&cli.input)
        .with_context(|| format!("cannot read URL listing {}", cli.input.display()))?;
    ensure_output_dir(&cli.output_dir)
        .with_context(|| format!("cannot use output directory {}", cli.output_dir.display()))?;

    // Fatal tier: without a browser there is nothing to run, so bail out
    // before any batch starts and emit no partial results.
    let session = BrowserSession::launch().context("cannot start the rendering engine")?;
    shot_info!(
        "Capturing {} URLs with up to {} in flight (browser: {})",
        items.len(),
        cli.concurrency,
        session.executable().display()
    );

    let settings = CaptureSettings {
        navigation_timeout: Duration::from_secs(cli.timeout_secs),
        jpeg_quality: cli.quality,
        ..CaptureSettings::default()
    };
    let renderer = Arc::new(ChromiumRenderer::new(session, settings));
    let operation = CaptureOperation::new(renderer, cli.output_dir.clone());

    let runner = BatchRunner::new(cli.concurrency);
    let result = runner
        .run(&items, &operation, &progress::LogProgressSink)
        .await;

    if !result.failed_items.is_empty() {
        let failed: Vec<WorkItem> = result
            .failed_items
            .iter()
            .map(|f| f.item.clone())
            .collect();
        let listing = write_failed_items(&cli.failed_list, &failed)
            .context("cannot write failed-URL listing")?;
        shot_warn!(
            "{} of {} captures failed; retry listing written to {}",
            result.failed_items.len(),
            result.total_items,
            listing.display()
        );
    }

    shot_info!(
        "All screenshots captured: {} processed, {} failed",
        result.processed_count,
        result.failed_items.len()
    );
    Ok(())
}
