// src/signal.rs

//! Ctrl+C handling.

use crate::cancellation::CancellationToken;
use anyhow::{Context, Result};

/// Registers a Ctrl+C (SIGINT/SIGTERM) handler that cancels the returned token.
///
/// The listing in progress is finished and flushed; the next directory is
/// not started.
///
/// # Errors
/// Returns an error if a handler is already installed for this process.
pub fn setup_signal_handler() -> Result<CancellationToken> {
    let token = CancellationToken::new();
    let handler_token = token.clone();

    ctrlc::set_handler(move || {
        log::info!("Interrupt received, stopping after the current directory.");
        handler_token.cancel();
    })
    .context("Failed to set Ctrl+C signal handler")?;

    Ok(token)
}
