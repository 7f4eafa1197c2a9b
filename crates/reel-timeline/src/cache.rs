//! TTL cache for computed timeline reports

use crate::report::TimelineReport;
use chrono::NaiveDate;
use moka::future::Cache;
use reel_config::CacheConfig;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Cache key for one trailing-window report
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct CacheKey {
    /// Length of the trailing window in days
    pub window_days: u32,
    /// Day the window ends on
    pub today: NaiveDate,
}

impl CacheKey {
    /// Key for a `window_days` window ending on `today`.
    pub fn new(window_days: u32, today: NaiveDate) -> Self {
        Self { window_days, today }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timeline:{}d:{}", self.window_days, self.today.format("%Y%m%d"))
    }
}

/// Shared, expiring store of built reports
///
/// Cloning is cheap and clones share the same entries.
#[derive(Clone)]
pub struct TimelineCache {
    inner: Cache<CacheKey, Arc<TimelineReport>>,
}

impl fmt::Debug for TimelineCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimelineCache")
            .field("entries", &self.inner.entry_count())
            .finish()
    }
}

impl TimelineCache {
    /// Cache holding up to `max_entries` reports for `ttl` each.
    pub fn new(ttl: Duration, max_entries: u64) -> Self {
        let inner = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(ttl)
            .build();

        info!(ttl_secs = ttl.as_secs(), max_entries, "Timeline cache initialized");
        Self { inner }
    }

    /// Cache described by `config`, or `None` when caching is disabled.
    pub fn from_config(config: &CacheConfig) -> Option<Self> {
        config
            .enabled
            .then(|| Self::new(Duration::from_secs(config.ttl_seconds), config.max_entries))
    }

    /// Cached report for `key`, if present and not expired.
    pub async fn get(&self, key: &CacheKey) -> Option<Arc<TimelineReport>> {
        let hit = self.inner.get(key).await;
        debug!(key = %key, hit = hit.is_some(), "Timeline cache lookup");
        hit
    }

    /// Store `report` under `key`.
    pub async fn insert(&self, key: CacheKey, report: Arc<TimelineReport>) {
        debug!(key = %key, "Caching timeline report");
        self.inner.insert(key, report).await;
    }

    /// Drop every cached report.
    pub fn invalidate_all(&self) {
        self.inner.invalidate_all();
        info!("Timeline cache cleared");
    }
}
