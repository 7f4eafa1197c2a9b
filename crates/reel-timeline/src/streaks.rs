//! Viewing streaks and consistency over the full history.

use crate::stats::round_to;
use chrono::NaiveDate;
use reel_common::ViewEvent;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Streak statistics over every recorded viewing day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreakReport {
    /// Run of consecutive days ending at the latest viewing day, if that day
    /// is today or yesterday; otherwise 0
    pub current_streak: u32,
    /// Longest run of consecutive viewing days
    pub longest_streak: u32,
    /// Distinct days with at least one watch
    pub total_days: u32,
    /// Share of days between first and last watch that had a watch, in
    /// percent; absent without any history
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consistency_score: Option<f64>,
}

/// Compute streaks over the full history, relative to `today`.
#[instrument(skip(events), fields(events = events.len()))]
pub fn compute_streaks(events: &[ViewEvent], today: NaiveDate) -> StreakReport {
    let dates: BTreeSet<NaiveDate> = events.iter().map(ViewEvent::date).collect();
    let dates: Vec<NaiveDate> = dates.into_iter().collect();
    streaks_from_dates(&dates, today)
}

/// Streaks over distinct viewing dates sorted ascending.
pub fn streaks_from_dates(dates: &[NaiveDate], today: NaiveDate) -> StreakReport {
    let (Some(&first), Some(&last)) = (dates.first(), dates.last()) else {
        return StreakReport::default();
    };

    let consecutive = |pair: &[NaiveDate]| (pair[1] - pair[0]).num_days() == 1;

    // A streak stays alive through the day after its last watch.
    let current_streak = if (today - last).num_days() <= 1 {
        1 + count_u32(dates.windows(2).rev().take_while(|pair| consecutive(*pair)).count())
    } else {
        0
    };

    let mut longest_streak = 1;
    let mut run = 1;
    for pair in dates.windows(2) {
        if consecutive(pair) {
            run += 1;
            longest_streak = longest_streak.max(run);
        } else {
            run = 1;
        }
    }

    let total_days = count_u32(dates.len());
    let consistency_score = Some(if dates.len() > 1 {
        let span = (last - first).num_days() + 1;
        round_to(dates.len() as f64 / span as f64 * 100.0, 1)
    } else {
        0.0
    });

    debug!(current_streak, longest_streak, total_days, "Computed viewing streaks");

    StreakReport {
        current_streak,
        longest_streak,
        total_days,
        consistency_score,
    }
}

fn count_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reel_common::test_utils::{day, watch};

    #[test]
    fn test_no_history() {
        let report = compute_streaks(&[], day(2024, 1, 5));
        assert_eq!(report, StreakReport::default());
        assert_eq!(report.consistency_score, None);
    }

    #[test]
    fn test_empty_report_serializes_three_counters() {
        let json = serde_json::to_value(compute_streaks(&[], day(2024, 1, 5))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"current_streak": 0, "longest_streak": 0, "total_days": 0})
        );
    }

    #[test]
    fn test_single_day_reports_zero_consistency() {
        let json = serde_json::to_value(compute_streaks(&[watch(2024, 1, 4, "A")], day(2024, 1, 4))).unwrap();
        assert_eq!(json["consistency_score"], serde_json::json!(0.0));
    }

    #[test]
    fn test_gap_breaks_current_streak_walk() {
        let events = [watch(2024, 1, 1, "A"), watch(2024, 1, 2, "B"), watch(2024, 1, 4, "C")];

        let report = compute_streaks(&events, day(2024, 1, 5));

        assert_eq!(report.longest_streak, 2);
        assert_eq!(report.current_streak, 1);
        assert_eq!(report.total_days, 3);
        // 3 viewing days over a 4-day span
        assert_eq!(report.consistency_score, Some(75.0));
    }

    #[test]
    fn test_streak_ending_today() {
        let events = [watch(2024, 1, 3, "A"), watch(2024, 1, 4, "B"), watch(2024, 1, 5, "C")];
        let report = compute_streaks(&events, day(2024, 1, 5));
        assert_eq!(report.current_streak, 3);
        assert_eq!(report.longest_streak, 3);
        assert_eq!(report.consistency_score, Some(100.0));
    }

    #[test]
    fn test_stale_streak_is_not_current() {
        let events = [watch(2024, 1, 3, "A"), watch(2024, 1, 4, "B")];
        let report = compute_streaks(&events, day(2024, 1, 6));
        assert_eq!(report.current_streak, 0);
        assert_eq!(report.longest_streak, 2);
    }

    #[test]
    fn test_same_day_watches_count_once() {
        let events = [watch(2024, 1, 4, "A"), watch(2024, 1, 4, "B"), watch(2024, 1, 4, "C")];
        let report = compute_streaks(&events, day(2024, 1, 4));
        assert_eq!(report.total_days, 1);
        assert_eq!(report.current_streak, 1);
        assert_eq!(report.longest_streak, 1);
        assert_eq!(report.consistency_score, Some(0.0));
    }

    #[test]
    fn test_longest_run_in_the_middle() {
        let dates: Vec<NaiveDate> = [1, 5, 6, 7, 8, 20, 21]
            .iter()
            .map(|&d| day(2024, 3, d))
            .collect();

        let report = streaks_from_dates(&dates, day(2024, 3, 22));

        assert_eq!(report.longest_streak, 4);
        assert_eq!(report.current_streak, 2);
        // 7 days over 21
        assert_eq!(report.consistency_score, Some(33.3));
    }

    #[test]
    fn test_unsorted_input_is_handled() {
        let events = [watch(2024, 1, 4, "C"), watch(2024, 1, 2, "B"), watch(2024, 1, 3, "A")];
        let report = compute_streaks(&events, day(2024, 1, 4));
        assert_eq!(report.current_streak, 3);
    }
}
