//! Configuration loading utilities

use crate::schema::Config;
use crate::validation::ConfigValidator;
use reel_common::{ReelError, Result as ReelResult};
use std::env;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_VAR: &str = "REEL_CONFIG_PATH";

/// Files probed in the working directory when no path is given.
const DEFAULT_CONFIG_FILES: [&str; 2] = ["reel.yaml", "reel.yml"];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        /// Variable name
        var: String,
        /// Parse failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A value that passed parsing but is not acceptable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for ReelError {
    fn from(err: ConfigError) -> Self {
        ReelError::config_with_source("Configuration loading failed", err)
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config: Config = serde_yaml::from_str(&content)?;
        debug!(path = %path.as_ref().display(), "Parsed configuration file");

        Self::apply_overrides(&mut config, |var| env::var(var).ok())?;
        ConfigValidator::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from `REEL_CONFIG_PATH`, a default file, or defaults.
    pub fn load() -> ReelResult<Config> {
        if let Ok(config_path) = env::var(CONFIG_PATH_VAR) {
            return Self::load_from_file(config_path);
        }

        if let Some(path) = DEFAULT_CONFIG_FILES.iter().find(|p| Path::new(p).exists()) {
            return Self::load_from_file(path);
        }

        info!("No configuration file found, using defaults");
        let mut config = Config::default();
        Self::apply_overrides(&mut config, |var| env::var(var).ok())?;
        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ReelResult<Config> {
        Ok(Self::load_config(path)?)
    }

    /// Apply overrides looked up through `lookup` (the process environment in production).
    pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("REEL_HISTORY_PATH") {
            config.data.history_path = path;
        }

        if let Some(days) = parse_var(&lookup, "REEL_WINDOW_DAYS")? {
            config.data.window_days = days;
        }

        if let Some(enabled) = parse_var(&lookup, "REEL_CACHE_ENABLED")? {
            config.cache.enabled = enabled;
        }

        if let Some(ttl) = parse_var(&lookup, "REEL_CACHE_TTL_SECONDS")? {
            config.cache.ttl_seconds = ttl;
        }

        if let Some(level) = lookup("REEL_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(json) = parse_var(&lookup, "REEL_LOG_JSON")? {
            config.logging.json_format = json;
        }

        if let Some(file) = lookup("REEL_LOG_FILE") {
            config.logging.file_path = Some(file);
        }

        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, var: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(var)
        .map(|value| {
            value.trim().parse().map_err(|e: T::Err| ConfigError::EnvParseError {
                var: var.to_string(),
                source: Box::new(e),
            })
        })
        .transpose()
}
