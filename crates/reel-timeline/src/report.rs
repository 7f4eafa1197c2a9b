//! The windowed timeline report and its shared series shape.

use crate::daily::DailySeries;
use crate::periodic::MonthlySeries;
use crate::summary::ViewingSummary;
use crate::trends::TrendReport;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// Parallel label/count/rating sequences plus their total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodSeries {
    /// Bucket labels, in output order
    pub labels: Vec<String>,
    /// Watches per bucket
    pub counts: Vec<u32>,
    /// Mean rating per bucket, `None` when nothing was rated
    pub ratings: Vec<Option<f64>>,
    /// Sum of `counts`
    pub total: u32,
}

impl PeriodSeries {
    pub(crate) fn push(&mut self, label: String, count: u32, rating: Option<f64>) {
        self.labels.push(label);
        self.counts.push(count);
        self.ratings.push(rating);
        self.total += count;
    }
}

/// Everything the timeline page charts for one window.
///
/// `summary` and `trends` serialize as `{}` when there is nothing to report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineReport {
    /// Dense per-day series
    pub daily: DailySeries,
    /// Sparse per-week series
    pub weekly: PeriodSeries,
    /// Sparse per-month series with top genres
    pub monthly: MonthlySeries,
    /// Fixed Sunday..Saturday series
    pub day_patterns: PeriodSeries,
    /// Summary statistics, absent for an empty window
    #[serde(serialize_with = "object_or_empty")]
    pub summary: Option<ViewingSummary>,
    /// First-half versus second-half comparison, absent below two events
    #[serde(serialize_with = "object_or_empty")]
    pub trends: Option<TrendReport>,
}

fn object_or_empty<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(inner) => inner.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}
