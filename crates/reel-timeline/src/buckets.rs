//! Bucket keys and chart labels derived from a watch timestamp.
//!
//! Weeks follow the Monday-first week-of-year rule (`%W`): days before the
//! first Monday of January belong to week `00`, the first Monday opens week
//! `01`. Weeks never straddle years, so `2024-W52` and `2025-W00` are
//! distinct buckets even when they share a calendar week.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Week bucket: calendar year plus Monday-first week-of-year (0..=53).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WeekKey {
    /// Calendar year of the day
    pub year: i32,
    /// Week-of-year, Monday as first day
    pub week: u32,
}

impl WeekKey {
    /// Week bucket containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            week: monday_week_of_year(date),
        }
    }

    /// Chart label, e.g. `Week 05`.
    pub fn label(&self) -> String {
        format!("Week {:02}", self.week)
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.year, self.week)
    }
}

/// Monday-first week-of-year, identical to strftime's `%W`.
pub fn monday_week_of_year(date: NaiveDate) -> u32 {
    (date.ordinal0() + 7 - date.weekday().num_days_from_monday()) / 7
}

/// First day of the month containing `date`; the month bucket key.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Daily chart label, e.g. `01/05`.
pub fn day_label(date: NaiveDate) -> String {
    date.format("%m/%d").to_string()
}

/// Monthly chart label, e.g. `Jan 2024`.
pub fn month_label(month: NaiveDate) -> String {
    month.format("%b %Y").to_string()
}

/// Day-of-week index, Sunday = 0 through Saturday = 6.
pub fn weekday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_sunday() as usize
}
