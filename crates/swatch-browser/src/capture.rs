//! Snapshot sources: a live headless Chrome, a saved file, and a recorder.

use std::path::{Path, PathBuf};

use chromiumoxide::browser::Browser;
use chromiumoxide::error::CdpError;
use chromiumoxide::page::Page;
use futures::StreamExt as _;
use swatch_common::url::UrlError;
use swatch_dom::{DocumentSnapshot, SnapshotError};
use swatch_extract::captured_properties;

use crate::options::BrowserOptions;
use crate::script::snapshot_script;

/// Errors produced while obtaining a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    /// The target could not be turned into a URL.
    #[error(transparent)]
    Target(#[from] UrlError),
    /// chromiumoxide rejected the launch configuration.
    #[error("invalid browser configuration: {0}")]
    Config(String),
    /// Chrome could not be started or connected to.
    #[error("failed to launch browser: {0}")]
    Launch(#[source] CdpError),
    /// The page could not be opened.
    #[error("navigation to {url} failed: {source}")]
    Navigation {
        /// The page being opened.
        url: String,
        /// Underlying protocol error.
        #[source]
        source: CdpError,
    },
    /// The page did not finish loading in time.
    #[error("navigation to {url} timed out after {seconds}s")]
    Timeout {
        /// The page being opened.
        url: String,
        /// The configured bound.
        seconds: u64,
    },
    /// The serialisation script threw or could not be run.
    #[error("snapshot script failed: {0}")]
    Evaluation(#[source] CdpError),
    /// The script's payload is not a valid snapshot.
    #[error("snapshot payload could not be decoded: {0}")]
    Decode(#[from] SnapshotError),
    /// A snapshot file could not be read or written.
    #[error("{}: {source}", .path.display())]
    Io {
        /// The snapshot file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Anything that can produce a snapshot of the page at a URL.
pub trait SnapshotSource {
    /// Capture the page at `url` (already normalised).
    fn capture(&self, url: &str) -> impl Future<Output = Result<DocumentSnapshot, CaptureError>>;
}

/// Captures pages with a freshly launched headless Chrome per call.
#[derive(Debug, Clone, Default)]
pub struct ChromeCapture {
    options: BrowserOptions,
}

impl ChromeCapture {
    /// Capture with the given options.
    #[must_use]
    pub const fn new(options: BrowserOptions) -> Self {
        Self { options }
    }

    /// The launch options.
    #[must_use]
    pub const fn options(&self) -> &BrowserOptions {
        &self.options
    }
}

impl SnapshotSource for ChromeCapture {
    async fn capture(&self, url: &str) -> Result<DocumentSnapshot, CaptureError> {
        capture_snapshot(url, &self.options).await
    }
}

/// Launch Chrome, load `url`, serialise the rendered page, and shut down.
///
/// # Errors
///
/// Returns a [`CaptureError`] for launch, navigation, timeout, evaluation
/// and decode failures. Chrome is closed on every path.
pub async fn capture_snapshot(
    url: &str,
    options: &BrowserOptions,
) -> Result<DocumentSnapshot, CaptureError> {
    let config = options.browser_config()?;
    let (mut browser, mut handler) = Browser::launch(config)
        .await
        .map_err(CaptureError::Launch)?;

    let handler_task = tokio::spawn(async move {
        while let Some(event) = handler.next().await {
            if let Err(error) = event {
                log::debug!(target: "swatch", "CDP handler: {error}");
            }
        }
    });

    log::info!(target: "swatch", "capturing {url}");
    let result = capture_page(&browser, url, options).await;

    if let Err(error) = browser.close().await {
        log::warn!(target: "swatch", "failed to close browser: {error}");
    }
    handler_task.abort();

    result
}

async fn capture_page(
    browser: &Browser,
    url: &str,
    options: &BrowserOptions,
) -> Result<DocumentSnapshot, CaptureError> {
    let navigation = async {
        let page = browser.new_page(url).await?;
        let _ = page.wait_for_navigation().await?;
        Ok::<Page, CdpError>(page)
    };
    let page = tokio::time::timeout(options.navigation_timeout, navigation)
        .await
        .map_err(|_| CaptureError::Timeout {
            url: url.to_string(),
            seconds: options.navigation_timeout.as_secs(),
        })?
        .map_err(|source| CaptureError::Navigation {
            url: url.to_string(),
            source,
        })?;

    if !options.settle_delay.is_zero() {
        tokio::time::sleep(options.settle_delay).await;
    }

    let script = snapshot_script(&captured_properties());
    let payload: String = page
        .evaluate(script)
        .await
        .map_err(CaptureError::Evaluation)?
        .into_value()
        .map_err(|error| CaptureError::Decode(SnapshotError::Json(error)))?;

    let mut snapshot = DocumentSnapshot::from_json(&payload)?;
    if snapshot.url().is_none() {
        snapshot.set_url(url);
    }
    log::debug!(target: "swatch", "captured {} nodes from {url}", snapshot.len());
    Ok(snapshot)
}

/// Replays a snapshot saved with [`Recorder`] or `swatch --save-snapshot`,
/// whatever URL is asked for.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    /// Read snapshots from `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotSource for SnapshotFile {
    async fn capture(&self, url: &str) -> Result<DocumentSnapshot, CaptureError> {
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| io_error(&self.path, source))?;
        let mut snapshot = DocumentSnapshot::from_json(&json)?;
        if snapshot.url().is_none() {
            snapshot.set_url(url);
        }
        Ok(snapshot)
    }
}

/// Wraps another source and writes every snapshot it captures to a file.
#[derive(Debug, Clone)]
pub struct Recorder<S> {
    inner: S,
    path: PathBuf,
}

impl<S> Recorder<S> {
    /// Record snapshots from `inner` into `path`.
    #[must_use]
    pub fn new(inner: S, path: impl Into<PathBuf>) -> Self {
        Self {
            inner,
            path: path.into(),
        }
    }
}

impl<S: SnapshotSource> SnapshotSource for Recorder<S> {
    async fn capture(&self, url: &str) -> Result<DocumentSnapshot, CaptureError> {
        let snapshot = self.inner.capture(url).await?;
        tokio::fs::write(&self.path, snapshot.to_json()?)
            .await
            .map_err(|source| io_error(&self.path, source))?;
        log::info!(target: "swatch", "saved snapshot to {}", self.path.display());
        Ok(snapshot)
    }
}

fn io_error(path: &Path, source: std::io::Error) -> CaptureError {
    CaptureError::Io {
        path: path.to_path_buf(),
        source,
    }
}
