//! Tracing subscriber setup
//!
//! Logs always go to stderr, since stdout carries the protocol. An optional
//! file receives the same events without ANSI colouring.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "notes_mcp=info,notes_core=info";

/// Initialize the global tracing subscriber.
///
/// Verbosity comes from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn init(log_file: Option<&Path>) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter_layer =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))?;

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    let file_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Some(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}
