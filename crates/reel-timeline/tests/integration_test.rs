//! Integration tests for timeline and streak reports.
//!
//! This test suite covers:
//! - Shape invariants of the timeline report over random histories
//! - Worked examples for streaks, trends and monthly genres
//! - The serialized shape of an empty report

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use reel_common::test_utils::{at, day, rated_watch, watch};
use reel_common::ViewEvent;
use reel_timeline::{build_timeline, compute_streaks, TrendDirection, WEEKDAY_NAMES};
use serde_json::json;

fn origin() -> NaiveDate {
    day(2024, 1, 1)
}

fn arb_event() -> impl Strategy<Value = ViewEvent> {
    (0i64..90, 0u32..24, proptest::option::of(0u8..=20), "[A-E]")
        .prop_map(|(offset, hour, rating, title)| {
            let watched_at = (origin() + Duration::days(offset))
                .and_hms_opt(hour, 30, 0)
                .unwrap();
            let mut event = ViewEvent::new(watched_at, title).with_genre("Drama, Comedy");
            if let Some(half_points) = rating {
                event = event.with_rating(f64::from(half_points) / 2.0);
            }
            event
        })
}

fn arb_window() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (0i64..60, 0i64..60).prop_map(|(start, len)| {
        let start = origin() + Duration::days(start);
        (start, start + Duration::days(len))
    })
}

#[cfg(test)]
mod property_tests {
    use super::*;

    proptest! {
        #[test]
        fn daily_series_is_dense(
            events in proptest::collection::vec(arb_event(), 0..40),
            (start, end) in arb_window(),
        ) {
            let report = build_timeline(&events, start, end).unwrap();
            let expected = usize::try_from((end - start).num_days() + 1).unwrap();

            prop_assert_eq!(report.daily.labels.len(), expected);
            prop_assert_eq!(report.daily.counts.len(), expected);
            prop_assert_eq!(report.daily.ratings.len(), expected);
        }

        #[test]
        fn section_totals_agree(
            events in proptest::collection::vec(arb_event(), 0..40),
            (start, end) in arb_window(),
        ) {
            let report = build_timeline(&events, start, end).unwrap();
            let in_window = events
                .iter()
                .filter(|e| (start..=end).contains(&e.date()))
                .count();
            let in_window = u32::try_from(in_window).unwrap();

            prop_assert_eq!(report.daily.counts.iter().sum::<u32>(), in_window);
            prop_assert_eq!(report.weekly.counts.iter().sum::<u32>(), in_window);
            prop_assert_eq!(report.monthly.counts.iter().sum::<u32>(), in_window);
            prop_assert_eq!(report.day_patterns.counts.iter().sum::<u32>(), in_window);
            prop_assert_eq!(report.daily.total, in_window);
            prop_assert_eq!(report.weekly.total, in_window);
            prop_assert_eq!(report.monthly.total, in_window);
            prop_assert_eq!(report.day_patterns.total, in_window);
        }

        #[test]
        fn weekday_labels_are_fixed(
            events in proptest::collection::vec(arb_event(), 0..40),
            (start, end) in arb_window(),
        ) {
            let report = build_timeline(&events, start, end).unwrap();
            prop_assert_eq!(report.day_patterns.labels, WEEKDAY_NAMES.to_vec());
        }

        #[test]
        fn report_is_idempotent(
            events in proptest::collection::vec(arb_event(), 0..40),
            (start, end) in arb_window(),
        ) {
            let first = serde_json::to_string(&build_timeline(&events, start, end).unwrap()).unwrap();
            let second = serde_json::to_string(&build_timeline(&events, start, end).unwrap()).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn streaks_are_ordered(
            events in proptest::collection::vec(arb_event(), 0..40),
            today_offset in 0i64..100,
        ) {
            let report = compute_streaks(&events, origin() + Duration::days(today_offset));

            prop_assert!(report.longest_streak >= report.current_streak);
            prop_assert!(report.total_days >= report.longest_streak);
            if report.total_days >= 1 {
                prop_assert!(report.longest_streak >= 1);
            }
            match report.consistency_score {
                Some(score) => {
                    prop_assert!((0.0..=100.0).contains(&score));
                }
                None => {
                    prop_assert_eq!(report.total_days, 0);
                }
            }
        }
    }
}

#[cfg(test)]
mod example_tests {
    use super::*;

    #[test]
    fn test_streak_example_with_gap() {
        let events = [watch(2024, 1, 1, "A"), watch(2024, 1, 2, "B"), watch(2024, 1, 4, "C")];

        let report = compute_streaks(&events, day(2024, 1, 5));

        assert_eq!(report.longest_streak, 2);
        assert_eq!(report.current_streak, 1);
    }

    #[test]
    fn test_empty_window_report() {
        let report = build_timeline(&[], day(2024, 1, 1), day(2024, 1, 10)).unwrap();
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["daily"]["counts"], json!(vec![0; 10]));
        assert_eq!(value["daily"]["total"], json!(0));
        assert_eq!(value["daily"]["max_day"], json!(0));
        assert_eq!(value["weekly"]["labels"], json!([]));
        assert_eq!(value["weekly"]["total"], json!(0));
        assert_eq!(value["monthly"]["genres"], json!([]));
        assert_eq!(value["day_patterns"]["counts"], json!([0, 0, 0, 0, 0, 0, 0]));
        assert_eq!(value["day_patterns"]["total"], json!(0));
        assert_eq!(value["summary"], json!({}));
        assert_eq!(value["trends"], json!({}));
    }

    #[test]
    fn test_rating_trend_example() {
        let events = [rated_watch(2024, 1, 2, "A", 4.0), rated_watch(2024, 1, 28, "B", 8.0)];

        let report = build_timeline(&events, day(2024, 1, 1), day(2024, 1, 31)).unwrap();
        let trends = report.trends.unwrap();

        assert_eq!(trends.rating_trend, Some(4.0));
        assert_eq!(trends.trend_direction, TrendDirection::Stable);
    }

    #[test]
    fn test_monthly_genre_ranking_example() {
        let events = [
            watch(2024, 3, 1, "A").with_genre("Action, Drama"),
            watch(2024, 3, 2, "B").with_genre("Action"),
            watch(2024, 3, 3, "C").with_genre("Comedy"),
        ];

        let report = build_timeline(&events, day(2024, 3, 1), day(2024, 3, 31)).unwrap();
        let value = serde_json::to_value(&report.monthly).unwrap();

        assert_eq!(value["labels"], json!(["Mar 2024"]));
        assert_eq!(
            value["genres"],
            json!([[["Action", 2], ["Drama", 1], ["Comedy", 1]]])
        );
    }

    #[test]
    fn test_summary_serializes_ranges_as_pairs() {
        let events = [
            watch(2024, 1, 1, "A").with_year(1999),
            ViewEvent::new(at(2024, 1, 8, 9, 0), "B").with_year(1984),
        ];

        let report = build_timeline(&events, day(2024, 1, 1), day(2024, 1, 8)).unwrap();
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["summary"]["year_range"], json!([1984, 1999]));
        assert_eq!(value["summary"]["date_range"], json!(["2024-01-01", "2024-01-08"]));
        assert_eq!(value["summary"]["avg_rating"], json!(null));
        assert_eq!(value["summary"]["avg_per_week"], json!(2.0));
    }

    #[test]
    fn test_weekly_labels_follow_monday_weeks() {
        // Sunday 2024-01-07 closes week 01; Monday 2024-01-08 opens week 02.
        let events = [watch(2024, 1, 7, "A"), watch(2024, 1, 8, "B")];

        let report = build_timeline(&events, day(2024, 1, 1), day(2024, 1, 14)).unwrap();

        assert_eq!(report.weekly.labels, vec!["Week 01", "Week 02"]);
    }
}
