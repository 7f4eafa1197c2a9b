//! Viewing-history records shared across the workspace.

use crate::error::{ReelError, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Timestamp formats accepted for `watched_at`, tried in order.
const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Lowest rating a user can give.
pub const MIN_RATING: f64 = 0.0;

/// Highest rating a user can give.
pub const MAX_RATING: f64 = 10.0;

/// A single watch of a movie, joined with its metadata and the user's rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewEvent {
    /// Local wall-clock time of the watch
    pub watched_at: NaiveDateTime,
    /// Movie title
    pub title: String,
    /// Comma-separated genre names
    pub genre: Option<String>,
    /// Release year
    pub year: Option<i32>,
    /// User rating in `[0, 10]`; `None` means unrated
    pub rating: Option<f64>,
}

impl ViewEvent {
    /// Create an unrated event with no metadata.
    pub fn new(watched_at: NaiveDateTime, title: impl Into<String>) -> Self {
        Self {
            watched_at,
            title: title.into(),
            genre: None,
            year: None,
            rating: None,
        }
    }

    /// Set the genre string.
    #[must_use]
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// Set the release year.
    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Set the user rating.
    #[must_use]
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Calendar day of the watch.
    pub fn date(&self) -> NaiveDate {
        self.watched_at.date()
    }

    /// Genre tokens: the genre string split on commas, trimmed, empties dropped.
    pub fn genres(&self) -> impl Iterator<Item = &str> {
        self.genre
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|g| !g.is_empty())
    }
}

/// A viewing-history row as the store hands it over, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawViewEvent {
    /// Timestamp text, e.g. `2024-01-05 21:30:00`
    pub watched_at: String,
    /// Movie title
    pub title: String,
    /// Comma-separated genre names
    #[serde(default)]
    pub genre: Option<String>,
    /// Release year
    #[serde(default)]
    pub year: Option<i32>,
    /// User rating
    #[serde(default)]
    pub rating: Option<f64>,
}

impl RawViewEvent {
    /// Validate this record, `index` being its position in the input.
    pub fn validate(self, index: usize) -> Result<ViewEvent> {
        let watched_at = parse_watched_at(&self.watched_at).ok_or_else(|| {
            ReelError::malformed(
                index,
                &self.title,
                format!("unparseable timestamp {:?}", self.watched_at),
            )
        })?;

        if let Some(rating) = self.rating {
            if !rating.is_finite() || !(MIN_RATING..=MAX_RATING).contains(&rating) {
                return Err(ReelError::malformed(
                    index,
                    &self.title,
                    format!("rating {rating} outside [{MIN_RATING}, {MAX_RATING}]"),
                ));
            }
        }

        Ok(ViewEvent {
            watched_at,
            title: self.title,
            genre: self.genre,
            year: self.year,
            rating: self.rating,
        })
    }
}

/// Validate a batch of raw records, failing on the first malformed one.
pub fn validate_all(raw: Vec<RawViewEvent>) -> Result<Vec<ViewEvent>> {
    raw.into_iter()
        .enumerate()
        .map(|(index, record)| record.validate(index))
        .collect()
}

/// Parse a stored timestamp; bare dates are taken as midnight.
pub fn parse_watched_at(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
