//! Capture, extract and cache, end to end.

use std::time::{Duration, Instant};

use swatch_common::url::{cache_key, normalize_target};
use swatch_dom::{DocumentSnapshot, StyleSnapshot};
use swatch_extract::{DesignReport, GroupingPolicy, extract_all_with};

use crate::cache::ReportCache;
use crate::capture::{CaptureError, SnapshotSource};
use crate::options::{BrowserOptions, DEFAULT_CACHE_TTL};

/// Turns targets into reports, reusing cached ones while they are fresh.
#[derive(Debug)]
pub struct Extractor<S, C> {
    source: S,
    cache: C,
    policy: GroupingPolicy,
    ttl: Duration,
}

impl<S: SnapshotSource, C: ReportCache> Extractor<S, C> {
    /// An extractor with the default grouping policy and cache lifetime.
    #[must_use]
    pub const fn new(source: S, cache: C) -> Self {
        Self {
            source,
            cache,
            policy: GroupingPolicy::Core,
            ttl: DEFAULT_CACHE_TTL,
        }
    }

    /// Group typography under `policy`.
    #[must_use]
    pub fn with_policy(mut self, policy: GroupingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Keep reports for `ttl`.
    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Keep reports for `options.cache_ttl`.
    #[must_use]
    pub fn with_options(self, options: &BrowserOptions) -> Self {
        self.with_ttl(options.cache_ttl)
    }

    /// The cache, for inspection.
    #[must_use]
    pub const fn cache(&self) -> &C {
        &self.cache
    }

    /// Report for `target`.
    ///
    /// # Algorithm
    ///
    /// STEP 1: Normalise the target and derive its cache key.
    ///
    /// STEP 2: Evict expired entries and return a fresh cached report if
    /// there is one.
    ///
    /// STEP 3: Otherwise capture the page, extract its tokens, and cache the
    /// report until `now + ttl`.
    ///
    /// # Errors
    ///
    /// Returns a [`CaptureError`] when the target is not a usable URL or the
    /// snapshot cannot be obtained. Failures are never cached.
    pub async fn extract(&self, target: &str) -> Result<DesignReport, CaptureError> {
        // STEP 1
        let url = normalize_target(target)?;
        let key = cache_key(&url);

        // STEP 2
        let evicted = self.cache.evict_expired();
        if evicted > 0 {
            log::debug!(target: "swatch", "evicted {evicted} expired reports");
        }
        if let Some(report) = self.cache.get(&key) {
            log::info!(target: "swatch", "serving cached report for {url}");
            return Ok(report);
        }

        // STEP 3
        let snapshot = self.source.capture(&url).await?;
        let report = build_report(&url, &snapshot, self.policy);
        self.cache.put(&key, report.clone(), Instant::now() + self.ttl);
        Ok(report)
    }
}

/// Extract every token from `snapshot` and label the result with `url`.
#[must_use]
pub fn build_report(
    url: &str,
    snapshot: &DocumentSnapshot,
    policy: GroupingPolicy,
) -> DesignReport {
    let tokens = extract_all_with(snapshot, policy);
    log::info!(
        target: "swatch",
        "{url}: {} colors, {} gradients, {} text styles from {} stylesheets",
        tokens.colors.len(),
        tokens.gradients.len(),
        tokens.typography.len(),
        snapshot.stylesheets().len()
    );
    DesignReport {
        url: url.to_string(),
        tokens,
    }
}
