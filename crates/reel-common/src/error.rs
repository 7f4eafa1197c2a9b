//! Error types and utilities for ReelTracker

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias for ReelTracker operations
pub type Result<T> = std::result::Result<T, ReelError>;

/// Main error type for ReelTracker operations
#[derive(Error, Debug)]
pub enum ReelError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable description
        message: String,
        /// Underlying cause, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A viewing-history record that cannot be placed on the timeline
    #[error("Malformed record #{index} ({title:?}): {reason}")]
    MalformedRecord {
        /// Position of the record in the input sequence
        index: usize,
        /// Title of the offending record
        title: String,
        /// What was wrong with it
        reason: String,
    },

    /// Requested window ends before it starts
    #[error("Invalid window: start {start} is after end {end}")]
    InvalidWindow {
        /// First day of the window
        start: NaiveDate,
        /// Last day of the window
        end: NaiveDate,
    },

    /// Validation errors for caller input
    #[error("Validation error: {message}")]
    Validation {
        /// Human readable description
        message: String,
        /// Offending field, if known
        field: Option<String>,
    },
}

impl ReelError {
    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a malformed-record error for the record at `index`
    pub fn malformed(index: usize, title: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            index,
            title: title.into(),
            reason: reason.into(),
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }
}
