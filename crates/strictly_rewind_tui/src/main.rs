//! Strictly Rewind - terminal entry point.

use anyhow::{Context, Result};
use clap::Parser;
use strictly_rewind_tui::{Cli, Settings, logging};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(&cli).context("Failed to load settings")?;
    logging::init(&settings)?;

    strictly_rewind_tui::run(&settings)
}
