//! Webshot engine: the collaborators behind the batch core.
//!
//! Everything the core treats as opaque lives here: locating and driving a
//! headless browser, deriving filesystem-safe artifact names, JPEG encoding,
//! and atomic persistence of screenshots and the failed-items listing.
mod browser;
mod capture;
mod filename;
mod persist;
mod render;
mod settings;

pub use browser::BrowserSession;
pub use capture::CaptureOperation;
pub use filename::artifact_filename;
pub use persist::{ensure_output_dir, write_failed_items, AtomicFileWriter, PersistError};
pub use render::{ChromiumRenderer, RenderError, Renderer};
pub use settings::CaptureSettings;
