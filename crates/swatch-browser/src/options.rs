//! Browser and cache configuration.

use std::path::PathBuf;
use std::time::Duration;

use chromiumoxide::browser::BrowserConfig;

use crate::CaptureError;

/// Default viewport width in CSS pixels.
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;
/// Default viewport height in CSS pixels.
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 800;
/// Default bound on navigation.
pub const DEFAULT_NAVIGATION_TIMEOUT: Duration = Duration::from_secs(30);
/// Default lifetime of a cached report.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60 * 60);

/// How to launch Chrome and how long to keep results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserOptions {
    /// Chrome or Chromium binary; auto-detected when `None`.
    pub chrome_executable: Option<PathBuf>,
    /// Window width. Media queries resolve against it.
    pub viewport_width: u32,
    /// Window height.
    pub viewport_height: u32,
    /// Upper bound on opening the page and waiting for its load event.
    pub navigation_timeout: Duration,
    /// Pause after load so late stylesheets and web fonts apply.
    pub settle_delay: Duration,
    /// Launch Chrome with `--no-sandbox` (needed when running as root).
    pub no_sandbox: bool,
    /// How long an [`crate::Extractor`] serves a report from its cache.
    pub cache_ttl: Duration,
}

impl Default for BrowserOptions {
    fn default() -> Self {
        Self {
            chrome_executable: None,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            navigation_timeout: DEFAULT_NAVIGATION_TIMEOUT,
            settle_delay: Duration::from_millis(250),
            no_sandbox: false,
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }
}

impl BrowserOptions {
    /// Translate into a chromiumoxide launch configuration (headless).
    ///
    /// # Errors
    ///
    /// Returns [`CaptureError::Config`] when no Chrome executable is given and
    /// none can be detected.
    pub fn browser_config(&self) -> Result<BrowserConfig, CaptureError> {
        let mut builder =
            BrowserConfig::builder().window_size(self.viewport_width, self.viewport_height);
        if let Some(path) = &self.chrome_executable {
            builder = builder.chrome_executable(path);
        }
        if self.no_sandbox {
            builder = builder.no_sandbox();
        }
        builder.build().map_err(CaptureError::Config)
    }
}
