//! Contact Assistant - Main entry point
//!
//! Runs an interactive session on stdin/stdout. Logs go to stderr so they
//! never mix with replies.

use anyhow::Result;
use contact_assistant::{Assistant, Config, Terminal};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    let fallback = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Default page size: {}", config.page_size);

    let assistant = Assistant::new(config);
    let stdin = io::stdin();
    let mut terminal = Terminal::new(stdin.lock(), io::stdout(), assistant);
    terminal.run()?;

    Ok(())
}
