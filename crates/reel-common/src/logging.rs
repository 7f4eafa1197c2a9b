//! Structured logging infrastructure for ReelTracker

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Configuration for the logging system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "reel_timeline=trace")
    pub level: String,
    /// Emit one JSON object per line
    pub json_format: bool,
    /// Multi-line human-friendly output with colors
    pub pretty_format: bool,
    /// Optional file path for log output
    pub file_path: Option<String>,
    /// Log span open/close events
    pub include_spans: bool,
    /// Include the target module of each event
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            pretty_format: true,
            file_path: None,
            include_spans: false,
            include_targets: true,
        }
    }
}

type InitResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Initialize the tracing subscriber with the given configuration.
///
/// `RUST_LOG` takes precedence over `config.level` when set. An invalid
/// filter falls back to `info`.
pub fn init_logging(config: LoggingConfig) -> InitResult {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let span_events = if config.include_spans {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let registry = tracing_subscriber::registry().with(env_filter);

    // Logs go to stderr so the JSON report on stdout stays clean.
    match (config.file_path.as_deref(), config.json_format) {
        (Some(path), json) => {
            let appender = file_appender(Path::new(path))?;
            let layer = fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_span_events(span_events)
                .with_target(config.include_targets);
            if json {
                registry.with(layer.json()).try_init()?;
            } else {
                registry.with(layer).try_init()?;
            }
        }
        (None, true) => {
            let layer = fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_span_events(span_events)
                .with_target(config.include_targets);
            registry.with(layer).try_init()?;
        }
        (None, false) if config.pretty_format => {
            let layer = fmt::layer()
                .pretty()
                .with_writer(std::io::stderr)
                .with_span_events(span_events)
                .with_target(config.include_targets);
            registry.with(layer).try_init()?;
        }
        (None, false) => {
            let layer = fmt::layer()
                .compact()
                .with_writer(std::io::stderr)
                .with_span_events(span_events)
                .with_target(config.include_targets);
            registry.with(layer).try_init()?;
        }
    }

    Ok(())
}

fn file_appender(
    path: &Path,
) -> Result<tracing_appender::rolling::RollingFileAppender, std::io::Error> {
    let directory = path.parent().filter(|p| !p.as_os_str().is_empty());
    let directory = directory.unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(directory)?;

    let file_name = path
        .file_name()
        .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::InvalidInput, "log path has no file name"))?;

    Ok(tracing_appender::rolling::never(directory, file_name))
}
