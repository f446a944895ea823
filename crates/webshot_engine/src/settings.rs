use std::time::Duration;

/// Knobs for a capture run, shared read-only across all in-flight captures.
#[derive(Debug, Clone)]
pub struct CaptureSettings {
    /// Browser viewport; kept small to keep artifacts small.
    pub viewport_width: u32,
    pub viewport_height: u32,
    /// Upper bound on one navigate-and-snapshot round trip.
    pub navigation_timeout: Duration,
    /// JPEG compression quality, 1-100.
    pub jpeg_quality: u8,
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            viewport_width: 800,
            viewport_height: 600,
            navigation_timeout: Duration::from_secs(60),
            jpeg_quality: 50,
        }
    }
}
