//! Fixed seven-bucket weekday pattern.

use crate::aggregator::DataAggregator;
use crate::buckets::weekday_index;
use crate::report::PeriodSeries;
use crate::stats::RatingAccumulator;
use reel_common::ViewEvent;

/// Weekday labels in output order, Sunday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Aggregator for watches per weekday
#[derive(Debug, Clone, Copy, Default)]
pub struct DayOfWeekAggregator;

impl DataAggregator for DayOfWeekAggregator {
    type Output = PeriodSeries;

    fn aggregate(&self, events: &[&ViewEvent]) -> PeriodSeries {
        let mut counts = [0u32; 7];
        let mut ratings = [RatingAccumulator::default(); 7];

        for event in events {
            let slot = weekday_index(event.date());
            counts[slot] += 1;
            ratings[slot].add(event);
        }

        let mut series = PeriodSeries::default();
        for ((name, count), acc) in WEEKDAY_NAMES.iter().zip(counts).zip(ratings) {
            series.push((*name).to_string(), count, acc.rounded_mean());
        }
        series
    }
}
