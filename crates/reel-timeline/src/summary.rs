//! Viewing-habit summary statistics.

use crate::stats::{round_to, GenreCount, GenreTally, RatingAccumulator};
use chrono::NaiveDate;
use reel_common::ViewEvent;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Genres listed in the summary.
pub const SUMMARY_TOP_GENRES: usize = 5;

/// Headline numbers for a set of watches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewingSummary {
    /// Number of watches
    pub total_views: usize,
    /// Distinct titles, compared exactly
    pub unique_movies: usize,
    /// Mean rating over rated watches, one decimal
    pub avg_rating: Option<f64>,
    /// Five most frequent genres
    pub top_genres: Vec<GenreCount>,
    /// Oldest and newest release year watched
    pub year_range: Option<(i32, i32)>,
    /// First and last watch date
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    /// Watches per week over the viewing span, one decimal
    pub avg_per_week: f64,
    /// Days between first and last watch
    pub viewing_span_days: i64,
}

/// Summarize `events`; `None` when there are none.
pub fn summarize(events: &[&ViewEvent]) -> Option<ViewingSummary> {
    let first_date = events.iter().map(|e| e.date()).min()?;
    let last_date = events.iter().map(|e| e.date()).max()?;

    let total_views = events.len();
    let unique_movies = events
        .iter()
        .map(|e| e.title.as_str())
        .collect::<HashSet<_>>()
        .len();

    let ratings: RatingAccumulator = events.iter().copied().collect();
    let genres: GenreTally = events.iter().copied().collect();

    let years = events.iter().filter_map(|e| e.year);
    let year_range = years
        .clone()
        .min()
        .zip(years.max());

    let viewing_span_days = (last_date - first_date).num_days();
    let avg_per_week = if viewing_span_days > 0 {
        round_to(total_views as f64 / viewing_span_days as f64 * 7.0, 1)
    } else {
        0.0
    };

    Some(ViewingSummary {
        total_views,
        unique_movies,
        avg_rating: ratings.rounded_mean(),
        top_genres: genres.top(SUMMARY_TOP_GENRES),
        year_range,
        date_range: Some((first_date, last_date)),
        avg_per_week,
        viewing_span_days,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use reel_common::test_utils::{day, rated_watch, sample_history, watch};

    #[test]
    fn test_empty_has_no_summary() {
        assert!(summarize(&[]).is_none());
    }

    #[test]
    fn test_sample_history_summary() {
        let history = sample_history();
        let refs: Vec<&ViewEvent> = history.iter().collect();

        let summary = summarize(&refs).unwrap();

        assert_eq!(summary.total_views, 6);
        assert_eq!(summary.unique_movies, 5);
        // (9.0 + 8.0 + 9.5 + 7.0) / 4 = 8.375
        assert_eq!(summary.avg_rating, Some(8.4));
        assert_eq!(summary.top_genres[0], ("Action".to_string(), 3));
        assert_eq!(summary.top_genres[1], ("Drama".to_string(), 3));
        assert_eq!(summary.top_genres.len(), SUMMARY_TOP_GENRES);
        assert_eq!(summary.year_range, Some((1979, 2017)));
        assert_eq!(summary.date_range, Some((day(2024, 1, 1), day(2024, 2, 14))));
        assert_eq!(summary.viewing_span_days, 44);
        // 6 / 44 * 7 = 0.954...
        assert_eq!(summary.avg_per_week, 1.0);
    }

    #[test]
    fn test_single_day_has_zero_span() {
        let events = [watch(2024, 5, 1, "A"), watch(2024, 5, 1, "B")];
        let refs: Vec<&ViewEvent> = events.iter().collect();

        let summary = summarize(&refs).unwrap();

        assert_eq!(summary.viewing_span_days, 0);
        assert_eq!(summary.avg_per_week, 0.0);
        assert_eq!(summary.year_range, None);
        assert_eq!(summary.avg_rating, None);
        assert!(summary.top_genres.is_empty());
    }

    #[test]
    fn test_titles_are_case_sensitive() {
        let events = [
            rated_watch(2024, 5, 1, "Heat", 8.0),
            rated_watch(2024, 5, 2, "heat", 6.0),
            rated_watch(2024, 5, 3, "Heat", 7.0),
        ];
        let refs: Vec<&ViewEvent> = events.iter().collect();

        let summary = summarize(&refs).unwrap();

        assert_eq!(summary.unique_movies, 2);
        assert_eq!(summary.avg_rating, Some(7.0));
        // 3 / 2 * 7 = 10.5
        assert_eq!(summary.avg_per_week, 10.5);
    }
}
