//! warpstart - interactive project launcher
//!
//! This is the main entry point for the warpstart command-line interface.

mod cli;
mod commands;
mod output;
mod prompt;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use warpstart_core::WarpstartConfig;

use cli::Cli;

/// Environment variable holding the log filter
const LOG_ENV: &str = "WARPSTART_LOG";

fn main() -> Result<()> {
    let _cli = Cli::parse();

    init_tracing();

    let config = WarpstartConfig::load()?;
    commands::run(&config)
}

/// Initialize tracing, quiet unless WARPSTART_LOG asks for more
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
