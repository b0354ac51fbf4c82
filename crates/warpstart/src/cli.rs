//! CLI argument parsing with clap
//!
//! The launcher is fully interactive, so only `--help` and `--version`
//! are accepted.

use clap::Parser;

/// warpstart - open a project's apps and run its commands in one go
#[derive(Parser, Debug)]
#[command(name = "warpstart")]
#[command(author, version, about, long_about = None)]
pub struct Cli {}
