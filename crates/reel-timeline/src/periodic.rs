//! Sparse weekly and monthly series.

use crate::aggregator::DataAggregator;
use crate::buckets::{month_label, month_start, WeekKey};
use crate::report::PeriodSeries;
use crate::stats::{GenreCount, GenreTally, RatingAccumulator};
use chrono::NaiveDate;
use reel_common::ViewEvent;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Genres reported per month.
pub const MONTHLY_TOP_GENRES: usize = 3;

/// Per-month counts, mean ratings and leading genres.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlySeries {
    /// `Mon YYYY` labels, ascending
    pub labels: Vec<String>,
    /// Watches per month
    pub counts: Vec<u32>,
    /// Mean rating per month
    pub ratings: Vec<Option<f64>>,
    /// Up to three most-watched genres per month
    pub genres: Vec<Vec<GenreCount>>,
    /// Sum of `counts`
    pub total: u32,
}

#[derive(Debug, Default)]
struct WeekBucket {
    count: u32,
    ratings: RatingAccumulator,
}

impl WeekBucket {
    fn add(&mut self, event: &ViewEvent) {
        self.count += 1;
        self.ratings.add(event);
    }
}

#[derive(Debug, Default)]
struct MonthBucket {
    count: u32,
    ratings: RatingAccumulator,
    genres: GenreTally,
}

impl MonthBucket {
    fn add(&mut self, event: &ViewEvent) {
        self.count += 1;
        self.ratings.add(event);
        self.genres.add(event);
    }
}

/// Aggregator for the sparse per-week series
#[derive(Debug, Clone, Copy, Default)]
pub struct WeeklyAggregator;

impl DataAggregator for WeeklyAggregator {
    type Output = PeriodSeries;

    fn aggregate(&self, events: &[&ViewEvent]) -> PeriodSeries {
        let mut weeks: BTreeMap<WeekKey, WeekBucket> = BTreeMap::new();
        for event in events {
            weeks.entry(WeekKey::of(event.date())).or_default().add(event);
        }

        let mut series = PeriodSeries::default();
        for (key, bucket) in &weeks {
            series.push(key.label(), bucket.count, bucket.ratings.rounded_mean());
        }

        debug!(weeks = weeks.len(), "Aggregated weekly series");
        series
    }
}

/// Aggregator for the sparse per-month series
#[derive(Debug, Clone, Copy, Default)]
pub struct MonthlyAggregator;

impl DataAggregator for MonthlyAggregator {
    type Output = MonthlySeries;

    fn aggregate(&self, events: &[&ViewEvent]) -> MonthlySeries {
        let mut months: BTreeMap<NaiveDate, MonthBucket> = BTreeMap::new();
        for event in events {
            months.entry(month_start(event.date())).or_default().add(event);
        }

        let mut series = MonthlySeries::default();
        for (month, bucket) in &months {
            series.labels.push(month_label(*month));
            series.counts.push(bucket.count);
            series.ratings.push(bucket.ratings.rounded_mean());
            series.genres.push(bucket.genres.top(MONTHLY_TOP_GENRES));
            series.total += bucket.count;
        }

        debug!(months = months.len(), "Aggregated monthly series");
        series
    }
}
