//! Configuration schema definitions using serde with validation attributes.

use reel_common::LoggingConfig;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Main configuration structure for ReelTracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Config {
    /// Viewing-history data configuration.
    #[validate]
    pub data: DataConfig,
    /// Timeline report cache configuration.
    #[validate]
    pub cache: CacheConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Viewing-history data configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DataConfig {
    /// Path of the JSON viewing-history export.
    #[validate(length(min = 1, message = "History path cannot be empty"))]
    pub history_path: String,
    /// Trailing window of the timeline report, in days.
    #[validate(range(min = 1, max = 3650, message = "Window must be between 1 and 3650 days"))]
    pub window_days: u32,
}

/// Timeline report cache configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CacheConfig {
    /// Whether reports are cached at all.
    pub enabled: bool,
    /// Time-to-live of a cached report, in seconds.
    #[validate(range(min = 1, max = 86400, message = "TTL must be between 1 and 86400 seconds"))]
    pub ttl_seconds: u64,
    /// Maximum number of cached reports.
    #[validate(range(min = 1, message = "Cache must hold at least one entry"))]
    pub max_entries: u64,
}
