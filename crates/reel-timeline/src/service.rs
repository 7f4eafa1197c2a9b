//! Service façade serving timeline and streak reports

use crate::aggregator::build_timeline;
use crate::cache::{CacheKey, TimelineCache};
use crate::clock::Clock;
use crate::report::TimelineReport;
use crate::source::ViewingHistorySource;
use crate::streaks::{compute_streaks, StreakReport};
use chrono::Duration;
use reel_common::{ReelError, Result};
use reel_config::defaults::MAX_WINDOW_DAYS;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Serves reports for a viewing history as seen from `clock`'s "now"
#[derive(Debug)]
pub struct TimelineService<S, C> {
    source: S,
    clock: C,
    cache: Option<TimelineCache>,
}

impl<S, C> TimelineService<S, C>
where
    S: ViewingHistorySource,
    C: Clock,
{
    /// Service without a cache; every call recomputes.
    pub fn new(source: S, clock: C) -> Self {
        Self {
            source,
            clock,
            cache: None,
        }
    }

    /// Serve timeline reports through `cache`.
    #[must_use]
    pub fn with_cache(mut self, cache: TimelineCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// The attached cache, if any.
    pub fn cache(&self) -> Option<&TimelineCache> {
        self.cache.as_ref()
    }

    /// Timeline over the trailing `days` ending now.
    ///
    /// # Errors
    /// Returns [`ReelError::Validation`] when `days` is 0 or above
    /// [`MAX_WINDOW_DAYS`], and propagates source failures.
    #[instrument(skip(self))]
    pub async fn viewing_timeline(&self, days: u32) -> Result<Arc<TimelineReport>> {
        if days == 0 {
            return Err(ReelError::validation_field(
                "Timeline window must be at least one day",
                "days",
            ));
        }
        if days > MAX_WINDOW_DAYS {
            return Err(ReelError::validation_field(
                format!("Timeline window of {days} days exceeds {MAX_WINDOW_DAYS} days"),
                "days",
            ));
        }

        let now = self.clock.now();
        let cutoff = Duration::try_days(i64::from(days))
            .and_then(|span| now.checked_sub_signed(span))
            .ok_or_else(|| ReelError::validation_field(format!("Window of {days} days is out of range"), "days"))?;

        let key = CacheKey::new(days, now.date());
        if let Some(cache) = &self.cache {
            if let Some(report) = cache.get(&key).await {
                debug!("Serving cached timeline");
                return Ok(report);
            }
        }

        let events = self.source.events_since(cutoff).await?;
        let report = Arc::new(build_timeline(&events, cutoff.date(), now.date())?);

        if let Some(cache) = &self.cache {
            cache.insert(key, Arc::clone(&report)).await;
        }

        Ok(report)
    }

    /// Streaks over the full history, relative to today.
    ///
    /// # Errors
    /// Propagates source failures.
    #[instrument(skip(self))]
    pub async fn viewing_streaks(&self) -> Result<StreakReport> {
        let events = self.source.all_events().await?;
        let today = self.clock.now().date();
        let report = compute_streaks(&events, today);

        info!(
            current = report.current_streak,
            longest = report.longest_streak,
            "Computed viewing streaks"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::source::InMemoryHistorySource;
    use reel_common::test_utils::{at, sample_history};

    fn service() -> TimelineService<InMemoryHistorySource, FixedClock> {
        TimelineService::new(
            InMemoryHistorySource::new(sample_history()),
            FixedClock(at(2024, 2, 15, 12, 0)),
        )
    }

    #[tokio::test]
    async fn test_zero_days_is_rejected() {
        let result = service().viewing_timeline(0).await;
        assert!(matches!(result, Err(ReelError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_window_above_limit_is_rejected() {
        let result = service().viewing_timeline(MAX_WINDOW_DAYS + 1).await;
        assert!(matches!(
            result,
            Err(ReelError::Validation { field: Some(ref f), .. }) if f == "days"
        ));
    }

    #[tokio::test]
    async fn test_longest_window_is_accepted() {
        let report = service().viewing_timeline(MAX_WINDOW_DAYS).await.unwrap();
        assert_eq!(report.daily.labels.len(), MAX_WINDOW_DAYS as usize + 1);
        assert_eq!(report.daily.total, 6);
    }

    #[tokio::test]
    async fn test_trailing_window_bounds() {
        let report = service().viewing_timeline(7).await.unwrap();

        // 02/08 through 02/15
        assert_eq!(report.daily.labels.first().map(String::as_str), Some("02/08"));
        assert_eq!(report.daily.labels.last().map(String::as_str), Some("02/15"));
        assert_eq!(report.daily.total, 1);
    }

    #[tokio::test]
    async fn test_streaks_use_clock_today() {
        let streaks = service().viewing_streaks().await.unwrap();

        // Last watch was 2024-02-14, the day before "now".
        assert_eq!(streaks.current_streak, 1);
        assert_eq!(streaks.longest_streak, 2);
        assert_eq!(streaks.total_days, 5);
    }
}
