use std::io::Cursor;
use std::process::Stdio;
use std::time::Duration;

use image::codecs::jpeg::JpegEncoder;
use thiserror::Error;
use tokio::process::Command;

use crate::browser::BrowserSession;
use crate::settings::CaptureSettings;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("no headless browser found on PATH (tried: {0})")]
    NoBrowser(String),
    #[error("navigation timed out after {0:?}")]
    Timeout(Duration),
    #[error("browser exited with {status}: {stderr}")]
    BrowserExit {
        status: std::process::ExitStatus,
        stderr: String,
    },
    #[error("screenshot image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Turns a URL into compressed image bytes. Opaque to the batch core;
/// swapped for a stub in tests.
#[async_trait::async_trait]
pub trait Renderer: Send + Sync {
    async fn render(&self, url: &str) -> Result<Vec<u8>, RenderError>;
}

/// Renders pages by driving a headless Chromium/Chrome binary in
/// single-shot screenshot mode, then re-encodes the capture as JPEG.
#[derive(Debug, Clone)]
pub struct ChromiumRenderer {
    session: BrowserSession,
    settings: CaptureSettings,
}

impl ChromiumRenderer {
    pub fn new(session: BrowserSession, settings: CaptureSettings) -> Self {
        Self { session, settings }
    }

    fn screenshot_command(&self, url: &str, png_path: &std::path::Path) -> Command {
        let mut cmd = Command::new(self.session.executable());
        cmd.arg("--headless=new")
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .arg("--disable-setuid-sandbox")
            .arg("--hide-scrollbars")
            .arg(format!(
                "--window-size={},{}",
                self.settings.viewport_width, self.settings.viewport_height
            ))
            .arg(format!("--screenshot={}", png_path.display()))
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        cmd
    }
}

#[async_trait::async_trait]
impl Renderer for ChromiumRenderer {
    async fn render(&self, url: &str) -> Result<Vec<u8>, RenderError> {
        // The browser only writes PNG; capture to a scratch dir, then
        // re-encode at the configured quality.
        let scratch = tempfile::tempdir()?;
        let png_path = scratch.path().join("shot.png");

        let mut cmd = self.screenshot_command(url, &png_path);
        let output = tokio::time::timeout(self.settings.navigation_timeout, cmd.output())
            .await
            .map_err(|_| RenderError::Timeout(self.settings.navigation_timeout))??;

        if !output.status.success() || !png_path.is_file() {
            return Err(RenderError::BrowserExit {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let png = tokio::fs::read(&png_path).await?;
        encode_jpeg(&png, self.settings.jpeg_quality)
    }
}

/// Re-encodes PNG bytes as a JPEG at the given quality.
fn encode_jpeg(png: &[u8], quality: u8) -> Result<Vec<u8>, RenderError> {
    let rgb = image::load_from_memory(png)?.into_rgb8();
    let mut out = Cursor::new(Vec::new());
    let mut encoder = JpegEncoder::new_with_quality(&mut out, quality);
    encoder.encode(
        rgb.as_raw(),
        rgb.width(),
        rgb.height(),
        image::ExtendedColorType::Rgb8,
    )?;
    Ok(out.into_inner())
}
