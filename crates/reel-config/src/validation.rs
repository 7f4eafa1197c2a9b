//! Runtime validation beyond what the derive attributes express.

use crate::loader::ConfigError;
use crate::schema::Config;
use validator::Validate;

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration: field rules first, then the log filter.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        config.validate()?;
        validate_log_level(&config.logging.level)
    }
}

/// Checks a filter such as `info` or `warn,reel_timeline=debug`.
///
/// Each comma-separated directive must end in a known level; a bare target
/// without `=` is accepted when it is itself a level.
pub fn validate_log_level(filter: &str) -> Result<(), ConfigError> {
    if filter.trim().is_empty() {
        return Err(ConfigError::Invalid("log level cannot be empty".to_string()));
    }

    for directive in filter.split(',').map(str::trim).filter(|d| !d.is_empty()) {
        let level = directive.rsplit('=').next().unwrap_or(directive);
        if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::Invalid(format!(
                "unknown log level {level:?} in directive {directive:?}"
            )));
        }
    }

    Ok(())
}
