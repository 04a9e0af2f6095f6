//! Logging setup.
//!
//! The terminal belongs to the game, so logs never go to stdout or stderr.
//! They are written to `BINGO_LOG_PATH` when it is set and dropped otherwise.
//! Verbosity follows `RUST_LOG` (default `info`).

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Returns whether logging is enabled.
pub fn init(log_path: Option<&Path>) -> Result<bool> {
    let Some(path) = log_path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing log subscriber: {e}"))?;

    Ok(true)
}
