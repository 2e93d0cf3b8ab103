//! Logging initialization for the CLI.
//!
//! Logging is owned by the CLI crate to keep the core crate lightweight.
//! All log output goes to stderr so stdout stays machine-readable under
//! `--json`.
//!
//! # Panics
//! [`init`] panics if a subscriber is already installed.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber.
///
/// * `verbosity` - 0 = INFO, 1 = DEBUG, 2+ = TRACE
/// * `json` - If true, emit JSON lines instead of human-readable output
pub fn init(verbosity: u8, json: bool) {
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    // RUST_LOG is respected; the verbosity flag raises our own crates.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"))
        .add_directive(format!("curlew={level}").parse().unwrap())
        .add_directive(level.into());

    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
