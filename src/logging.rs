//! Diagnostic logging via `tracing`.
//!
//! User-facing output goes to stdout through the console; log events go to
//! stderr so the two never interleave in a pipe.

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::domain::AppError;

/// Filter directives, e.g. `DOCFILL_LOG=docfill=debug`.
pub const LOG_ENV: &str = "DOCFILL_LOG";
pub const DEFAULT_LEVEL: &str = "warn";

/// Install the global subscriber.
pub fn init() -> Result<(), AppError> {
    let filter = build_env_filter()?;

    Registry::default()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| AppError::config_error(format!("Failed to initialize logging: {}", e)))
}

fn build_env_filter() -> Result<EnvFilter, AppError> {
    match std::env::var(LOG_ENV) {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::try_new(directives.trim())
            .map_err(|e| AppError::config_error(format!("Invalid {}: {}", LOG_ENV, e))),
        _ => Ok(EnvFilter::new(DEFAULT_LEVEL)),
    }
}
