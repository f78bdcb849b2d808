//! Logging setup
//!
//! The engine emits `tracing` events; binaries decide where they go.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV: &str = "EVIL_HANGMAN_LOG";

/// Build the filter from [`LOG_ENV`], falling back to a level based on `debug`
#[must_use]
pub fn filter(debug: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if debug {
            EnvFilter::new("warn,evil_hangman=debug")
        } else {
            EnvFilter::new("warn")
        }
    })
}

/// Initialize logging to stderr
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(debug: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(debug))
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("Failed to install log subscriber")
}

/// Initialize logging to a file, for modes that own the terminal
///
/// # Errors
///
/// Returns an error if the file cannot be created or a global subscriber is
/// already installed.
pub fn init_file_logging(debug: bool, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter(debug))
        .with_target(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("Failed to install log subscriber")
}
