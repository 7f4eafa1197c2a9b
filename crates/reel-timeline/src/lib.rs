//! # Reel Timeline
//!
//! Time-series analytics over a viewing-history log.
//!
//! [`build_timeline`] turns the events of a window into daily, weekly,
//! monthly and day-of-week series plus a summary and a trend block;
//! [`compute_streaks`] measures viewing streaks over the whole history.
//! [`TimelineService`] wires both to a [`ViewingHistorySource`], a [`Clock`]
//! and an optional [`TimelineCache`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]

pub mod aggregator;
pub mod buckets;
pub mod cache;
pub mod clock;
pub mod daily;
pub mod day_of_week;
pub mod periodic;
pub mod report;
pub mod service;
pub mod source;
pub mod stats;
pub mod streaks;
pub mod summary;
pub mod trends;

pub use aggregator::{build_timeline, DataAggregator};
pub use cache::{CacheKey, TimelineCache};
pub use clock::{Clock, FixedClock, SystemClock};
pub use daily::{DailyAggregator, DailySeries};
pub use day_of_week::{DayOfWeekAggregator, WEEKDAY_NAMES};
pub use periodic::{MonthlyAggregator, MonthlySeries, WeeklyAggregator};
pub use report::{PeriodSeries, TimelineReport};
pub use service::TimelineService;
pub use source::{InMemoryHistorySource, JsonFileHistorySource, ViewingHistorySource};
pub use stats::GenreCount;
pub use streaks::{compute_streaks, StreakReport};
pub use summary::{summarize, ViewingSummary};
pub use trends::{analyze_trends, TrendDirection, TrendReport};
