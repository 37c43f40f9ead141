//! Browser side of the swatch extractor.
//!
//! # Architecture
//!
//! ```text
//! target ──► normalize_target ──► ReportCache hit? ──► DesignReport
//!                                       │ miss
//!                                       ▼
//!                     SnapshotSource::capture (Chrome / file)
//!                                       │
//!                                       ▼
//!                            swatch_extract::extract_all
//! ```
//!
//! - [`ChromeCapture`] launches headless Chrome through chromiumoxide,
//!   navigates, and evaluates the script from [`snapshot_script`] once.
//! - [`SnapshotFile`] and [`Recorder`] replay and save snapshots so the
//!   pipeline can run offline.
//! - [`Extractor`] ties a source to a [`ReportCache`].

pub mod cache;
pub mod capture;
pub mod extractor;
pub mod options;
pub mod script;

pub use cache::{MemoryCache, ReportCache};
pub use capture::{
    CaptureError, ChromeCapture, Recorder, SnapshotFile, SnapshotSource, capture_snapshot,
};
pub use extractor::{Extractor, build_report};
pub use options::BrowserOptions;
pub use script::snapshot_script;
