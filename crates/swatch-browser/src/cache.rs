//! Report cache.
//!
//! Capturing a page means launching Chrome, so finished reports are kept for
//! a while keyed by URL. The cache is a trait handed to the
//! [`crate::Extractor`]; there is no process-wide instance.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use swatch_extract::DesignReport;

/// A keyed store of reports with explicit expiry.
pub trait ReportCache {
    /// The report stored under `key`, unless it has expired.
    fn get(&self, key: &str) -> Option<DesignReport>;

    /// Store `value` under `key` until `expires_at`, replacing any entry.
    fn put(&self, key: &str, value: DesignReport, expires_at: Instant);

    /// Drop every expired entry, returning how many were dropped.
    fn evict_expired(&self) -> usize;
}

/// In-process [`ReportCache`] behind a mutex.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, (DesignReport, Instant)>>,
}

impl MemoryCache {
    /// An empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, expired ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True when nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic while holding the lock cannot leave a half-written entry
    // behind, so a poisoned map is still usable.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, (DesignReport, Instant)>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ReportCache for MemoryCache {
    fn get(&self, key: &str) -> Option<DesignReport> {
        let entries = self.lock();
        let (report, expires_at) = entries.get(key)?;
        (Instant::now() < *expires_at).then(|| report.clone())
    }

    fn put(&self, key: &str, value: DesignReport, expires_at: Instant) {
        let _ = self.lock().insert(key.to_string(), (value, expires_at));
    }

    fn evict_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|_, (_, expires_at)| now < *expires_at);
        before - entries.len()
    }
}
