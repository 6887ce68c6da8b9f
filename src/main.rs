//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `email_domain_checker` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Exit status on fatal errors
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use email_domain_checker::initialization::init_logger_with;
use email_domain_checker::{run_server, Config, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from(Opt::parse());

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    if let Err(e) = run_server(config).await {
        eprintln!("email_domain_checker error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
