//! Trend analysis comparing the first and second half of a window's watches.

use crate::stats::{round_to, RatingAccumulator};
use reel_common::ViewEvent;
use serde::{Deserialize, Serialize};

/// Direction of trend movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// Watching more often than before
    Increasing,
    /// Watching less often than before
    Decreasing,
    /// No measurable change
    Stable,
}

impl TrendDirection {
    fn from_change(change: f64) -> Self {
        if change > 0.0 {
            Self::Increasing
        } else if change < 0.0 {
            Self::Decreasing
        } else {
            Self::Stable
        }
    }
}

/// First-half versus second-half comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendReport {
    /// Change in mean rating, one decimal; `None` if either half is unrated
    pub rating_trend: Option<f64>,
    /// Change in watches per day, two decimals
    pub frequency_trend: f64,
    /// Sign of `frequency_trend`
    pub trend_direction: TrendDirection,
}

/// Compare the older and newer half of `events`; `None` below two events.
///
/// Events are ordered by timestamp and split at `len / 2`, so with an odd
/// count the newer half holds the extra event.
pub fn analyze_trends(events: &[&ViewEvent]) -> Option<TrendReport> {
    if events.len() < 2 {
        return None;
    }

    let mut ordered = events.to_vec();
    ordered.sort_by_key(|e| e.watched_at);
    let (first, second) = ordered.split_at(ordered.len() / 2);

    let first_rating: RatingAccumulator = first.iter().copied().collect();
    let second_rating: RatingAccumulator = second.iter().copied().collect();
    let rating_trend = first_rating
        .mean()
        .zip(second_rating.mean())
        .map(|(before, after)| round_to(after - before, 1));

    let frequency_trend = round_to(per_day(second) - per_day(first), 2);

    Some(TrendReport {
        rating_trend,
        frequency_trend,
        trend_direction: TrendDirection::from_change(frequency_trend),
    })
}

/// Watches per day across a time-ordered, non-empty half.
///
/// The span is the number of whole days between its first and last
/// timestamp, floored at one.
fn per_day(half: &[&ViewEvent]) -> f64 {
    let span = match (half.first(), half.last()) {
        (Some(first), Some(last)) => (last.watched_at - first.watched_at).num_days(),
        _ => 0,
    };
    half.len() as f64 / span.max(1) as f64
}
