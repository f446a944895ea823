use std::env;
use std::path::{Path, PathBuf};

use crate::render::RenderError;

/// Headless browser binaries probed on PATH, in preference order.
const BROWSER_CANDIDATES: &[&str] = &["chromium", "chromium-browser", "google-chrome", "chrome"];

/// Handle on the shared rendering resource for one run.
///
/// The session is acquired once, before any batch starts, and shared
/// read-only across every concurrent capture. Acquisition failure is the
/// fatal tier of error handling: the run must not start without it.
#[derive(Debug, Clone)]
pub struct BrowserSession {
    executable: PathBuf,
}

impl BrowserSession {
    /// Locates a headless Chromium/Chrome binary on PATH.
    pub fn launch() -> Result<Self, RenderError> {
        let path_var = env::var_os("PATH").unwrap_or_default();
        let dirs: Vec<PathBuf> = env::split_paths(&path_var).collect();
        match search_dirs(&dirs, BROWSER_CANDIDATES) {
            Some(executable) => Ok(Self { executable }),
            None => Err(RenderError::NoBrowser(BROWSER_CANDIDATES.join(", "))),
        }
    }

    /// Uses a known browser binary instead of probing PATH.
    pub fn from_executable(executable: PathBuf) -> Self {
        Self { executable }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }
}

fn search_dirs(dirs: &[PathBuf], names: &[&str]) -> Option<PathBuf> {
    for name in names {
        for dir in dirs {
            let candidate = dir.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}
