//! Aggregation pipeline turning viewing events into a timeline report

use crate::daily::DailyAggregator;
use crate::day_of_week::DayOfWeekAggregator;
use crate::periodic::{MonthlyAggregator, WeeklyAggregator};
use crate::report::TimelineReport;
use crate::summary::summarize;
use crate::trends::analyze_trends;
use chrono::NaiveDate;
use reel_common::{ReelError, Result, ViewEvent};
use tracing::{debug, info, instrument};

/// Trait for aggregating events into one section of the report
pub trait DataAggregator {
    /// Aggregated section produced by this aggregator
    type Output;

    /// Aggregate the given events. Never fails; empty input yields an
    /// empty section.
    fn aggregate(&self, events: &[&ViewEvent]) -> Self::Output;
}

/// Build every section of the timeline over the inclusive window
/// `[window_start, window_end]`.
///
/// Events dated outside the window are dropped before any section is
/// computed, so `daily`, `weekly`, `monthly` and `day_patterns` always agree
/// on their totals.
///
/// # Errors
/// Returns [`ReelError::InvalidWindow`] when `window_start` is after
/// `window_end`.
#[instrument(skip(events), fields(events = events.len()))]
pub fn build_timeline(
    events: &[ViewEvent],
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> Result<TimelineReport> {
    if window_start > window_end {
        return Err(ReelError::InvalidWindow {
            start: window_start,
            end: window_end,
        });
    }

    let in_window: Vec<&ViewEvent> = events
        .iter()
        .filter(|event| (window_start..=window_end).contains(&event.date()))
        .collect();

    let skipped = events.len() - in_window.len();
    if skipped > 0 {
        debug!(skipped, "Ignoring events outside the report window");
    }

    let report = TimelineReport {
        daily: DailyAggregator::new(window_start, window_end).aggregate(&in_window),
        weekly: WeeklyAggregator.aggregate(&in_window),
        monthly: MonthlyAggregator.aggregate(&in_window),
        day_patterns: DayOfWeekAggregator.aggregate(&in_window),
        summary: summarize(&in_window),
        trends: analyze_trends(&in_window),
    };

    info!(
        views = report.daily.total,
        days = report.daily.labels.len(),
        "Built viewing timeline"
    );

    Ok(report)
}
