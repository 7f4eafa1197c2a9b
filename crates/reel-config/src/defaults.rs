//! Default values for every configuration section.

use crate::schema::{CacheConfig, Config, DataConfig};
use reel_common::LoggingConfig;

/// Default path of the viewing-history export.
pub const DEFAULT_HISTORY_PATH: &str = "viewing_history.json";

/// Default trailing window of the timeline report.
pub const DEFAULT_WINDOW_DAYS: u32 = 365;

/// Longest accepted trailing window, in days.
pub const MAX_WINDOW_DAYS: u32 = 3650;

/// Default lifetime of a cached report, in seconds.
pub const DEFAULT_CACHE_TTL_SECONDS: u64 = 60;

/// Default number of cached reports.
pub const DEFAULT_CACHE_MAX_ENTRIES: u64 = 64;

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            cache: CacheConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            history_path: DEFAULT_HISTORY_PATH.to_string(),
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl_seconds: DEFAULT_CACHE_TTL_SECONDS,
            max_entries: DEFAULT_CACHE_MAX_ENTRIES,
        }
    }
}
