//! ReelTracker - Main Entry Point

use anyhow::{anyhow, Result};
use clap::Parser;
use reel_common::init_logging;
use reel_timeline::SystemClock;
use reel_tracker::{execute, Cli};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = cli.load_config()?;
    init_logging(config.logging.clone()).map_err(|e| anyhow!(e))?;

    info!("Configuration loaded successfully");

    match execute(&cli, &config, SystemClock).await {
        Ok(json) => {
            println!("{json}");
            Ok(())
        }
        Err(e) => {
            error!("Report failed: {e:#}");
            Err(e)
        }
    }
}
