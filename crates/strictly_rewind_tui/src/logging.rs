//! Tracing setup.
//!
//! The terminal is owned by the UI, so logs always go to a file.

use crate::config::Settings;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber writing to the configured log file.
///
/// `RUST_LOG` takes precedence over the configured filter. Calling this twice
/// keeps the first subscriber.
pub fn init(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!("Failed to create log file {}", settings.log_file().display())
    })?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(settings.log_filter()))
        .with_context(|| format!("Invalid log filter {:?}", settings.log_filter()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
