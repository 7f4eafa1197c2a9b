//! Test utilities and shared fixtures for the ReelTracker workspace.
//!
//! Enabled for this crate's own tests and, through the `testing` feature,
//! for the tests of every other crate in the workspace.

use crate::types::{RawViewEvent, ViewEvent};
use chrono::{NaiveDate, NaiveDateTime};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Initialize logging for tests. Safe to call from every test.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Calendar day fixture.
///
/// # Panics
/// Panics on an invalid date.
pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// Timestamp fixture.
///
/// # Panics
/// Panics on an invalid date or time.
pub fn at(year: i32, month: u32, d: u32, hour: u32, min: u32) -> NaiveDateTime {
    day(year, month, d)
        .and_hms_opt(hour, min, 0)
        .expect("valid fixture time")
}

/// An unrated watch at 20:00 on the given day.
pub fn watch(year: i32, month: u32, d: u32, title: &str) -> ViewEvent {
    ViewEvent::new(at(year, month, d, 20, 0), title)
}

/// A rated watch at 20:00 on the given day.
pub fn rated_watch(year: i32, month: u32, d: u32, title: &str, rating: f64) -> ViewEvent {
    watch(year, month, d, title).with_rating(rating)
}

/// A small, realistic history spanning January and February 2024.
pub fn sample_history() -> Vec<ViewEvent> {
    vec![
        ViewEvent::new(at(2024, 1, 1, 19, 30), "Heat")
            .with_genre("Action, Crime, Drama")
            .with_year(1995)
            .with_rating(9.0),
        ViewEvent::new(at(2024, 1, 2, 21, 0), "Alien")
            .with_genre("Horror, Sci-Fi")
            .with_year(1979)
            .with_rating(8.0),
        ViewEvent::new(at(2024, 1, 2, 23, 15), "Aliens")
            .with_genre("Action, Sci-Fi")
            .with_year(1986),
        ViewEvent::new(at(2024, 1, 13, 15, 0), "Paddington 2")
            .with_genre("Comedy, Family")
            .with_year(2017)
            .with_rating(9.5),
        ViewEvent::new(at(2024, 2, 3, 20, 45), "Heat")
            .with_genre("Action, Crime, Drama")
            .with_year(1995),
        ViewEvent::new(at(2024, 2, 14, 22, 0), "Before Sunrise")
            .with_genre("Drama, Romance")
            .with_year(1995)
            .with_rating(7.0),
    ]
}

/// Raw rows for [`sample_history`], as a store export would carry them.
pub fn sample_raw_history() -> Vec<RawViewEvent> {
    sample_history()
        .into_iter()
        .map(|event| RawViewEvent {
            watched_at: event.watched_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            title: event.title,
            genre: event.genre,
            year: event.year,
            rating: event.rating,
        })
        .collect()
}

/// Write `records` as a JSON array into a fresh temporary file.
///
/// # Panics
/// Panics if the file cannot be created or written.
#[cfg(feature = "tempfile")]
pub fn write_history_file(records: &[RawViewEvent]) -> tempfile::NamedTempFile {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temporary file");
    let json = serde_json::to_string(records).expect("Failed to serialize fixture records");
    file.write_all(json.as_bytes())
        .expect("Failed to write fixture records");
    file
}

/// Assert that two floating point numbers are approximately equal within a tolerance.
pub fn assert_approx_eq(left: f64, right: f64, tolerance: f64) {
    let diff = (left - right).abs();
    assert!(
        diff <= tolerance,
        "assertion failed: `{left}` is not approximately equal to `{right}` (tolerance: {tolerance}, diff: {diff})"
    );
}
