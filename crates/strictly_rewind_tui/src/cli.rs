//! Command-line interface for strictly_rewind.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Rewind - tic-tac-toe with a history you can jump through
#[derive(Parser, Debug, Default)]
#[command(name = "strictly_rewind")]
#[command(about = "Two-player tic-tac-toe with move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter directive used when RUST_LOG is unset (e.g. "debug")
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Hide the key help line
    #[arg(long)]
    pub no_help: bool,
}
