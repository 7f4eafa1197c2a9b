//! Command line arguments and command execution.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use reel_config::{Config, ConfigLoader, CONFIG_PATH_VAR};
use reel_timeline::{Clock, JsonFileHistorySource, TimelineCache, TimelineService};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "reel-tracker", author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = CONFIG_PATH_VAR)]
    pub config: Option<PathBuf>,

    /// Report to print
    #[command(subcommand)]
    pub command: Command,
}

/// Available reports
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Daily, weekly, monthly and weekday series over a trailing window
    Timeline {
        /// Window length in days (default from configuration)
        #[arg(short, long)]
        days: Option<u32>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Current and longest viewing streaks over the full history
    Streaks {
        #[command(flatten)]
        output: OutputArgs,
    },
}

/// Options shared by every report
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Viewing-history JSON file, overriding the configured path
    #[arg(long)]
    pub history: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl Command {
    /// Output options of this command.
    pub fn output(&self) -> &OutputArgs {
        match self {
            Command::Timeline { output, .. } | Command::Streaks { output } => output,
        }
    }
}

impl Cli {
    /// Load the configuration this invocation asks for, with `--history`
    /// applied on top.
    ///
    /// # Errors
    /// Fails when the configuration file cannot be read or is invalid.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => ConfigLoader::load_from_file(path)
                .with_context(|| format!("failed to load configuration from {}", path.display()))?,
            None => ConfigLoader::load().context("failed to load configuration")?,
        };

        if let Some(history) = &self.command.output().history {
            config.data.history_path = history.display().to_string();
        }

        Ok(config)
    }
}

/// Run the requested report and return it rendered as JSON.
///
/// # Errors
/// Fails when the history cannot be read or validated, or the window is
/// rejected.
pub async fn execute<C: Clock>(cli: &Cli, config: &Config, clock: C) -> Result<String> {
    let source = JsonFileHistorySource::new(&config.data.history_path);
    let mut service = TimelineService::new(source, clock);
    if let Some(cache) = TimelineCache::from_config(&config.cache) {
        service = service.with_cache(cache);
    }

    let pretty = cli.command.output().pretty;
    match &cli.command {
        Command::Timeline { days, .. } => {
            let days = days.unwrap_or(config.data.window_days);
            info!(days, history = %config.data.history_path, "Building viewing timeline");

            let report = service
                .viewing_timeline(days)
                .await
                .with_context(|| format!("failed to build a {days}-day timeline"))?;
            render(report.as_ref(), pretty)
        }
        Command::Streaks { .. } => {
            info!(history = %config.data.history_path, "Computing viewing streaks");

            let report = service
                .viewing_streaks()
                .await
                .context("failed to compute viewing streaks")?;
            render(&report, pretty)
        }
    }
}

fn render<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    debug!(bytes = json.len(), "Rendered report");
    Ok(json)
}
