//! Dense per-day series over the report window.

use crate::aggregator::DataAggregator;
use crate::buckets::day_label;
use crate::stats::RatingAccumulator;
use chrono::NaiveDate;
use reel_common::ViewEvent;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Per-day counts and mean ratings, one entry for every day of the window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySeries {
    /// `MM/DD` labels, ascending
    pub labels: Vec<String>,
    /// Watches per day
    pub counts: Vec<u32>,
    /// Mean rating per day, `None` when nothing was rated
    pub ratings: Vec<Option<f64>>,
    /// Sum of `counts`
    pub total: u32,
    /// Highest single-day count
    pub max_day: u32,
}

#[derive(Debug, Default)]
struct DayBucket {
    count: u32,
    ratings: RatingAccumulator,
}

/// Aggregator for the dense daily series over `[start, end]`
#[derive(Debug, Clone, Copy)]
pub struct DailyAggregator {
    /// First day of the window
    pub start: NaiveDate,
    /// Last day of the window, inclusive
    pub end: NaiveDate,
}

impl DailyAggregator {
    /// Aggregator over the inclusive window `[start, end]`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Number of days in the window.
    pub fn window_len(&self) -> usize {
        usize::try_from((self.end - self.start).num_days() + 1).unwrap_or(0)
    }
}

impl DataAggregator for DailyAggregator {
    type Output = DailySeries;

    fn aggregate(&self, events: &[&ViewEvent]) -> DailySeries {
        let mut days: BTreeMap<NaiveDate, DayBucket> = self
            .start
            .iter_days()
            .take_while(|day| *day <= self.end)
            .map(|day| (day, DayBucket::default()))
            .collect();

        for event in events {
            // Days outside the window have no slot in the dense calendar.
            if let Some(bucket) = days.get_mut(&event.date()) {
                bucket.count += 1;
                bucket.ratings.add(event);
            }
        }

        let mut series = DailySeries {
            labels: Vec::with_capacity(days.len()),
            counts: Vec::with_capacity(days.len()),
            ratings: Vec::with_capacity(days.len()),
            total: 0,
            max_day: 0,
        };

        for (day, bucket) in days {
            series.labels.push(day_label(day));
            series.counts.push(bucket.count);
            series.ratings.push(bucket.ratings.rounded_mean());
            series.total += bucket.count;
            series.max_day = series.max_day.max(bucket.count);
        }

        debug!(days = series.labels.len(), total = series.total, "Aggregated daily series");
        series
    }
}
