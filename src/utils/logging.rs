//! Tracing subscriber setup

use crate::config::LoggingConfig;
use crate::utils::error::{AdvisorError, Result};
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

/// Level used before the configured subscriber is installed
const BOOTSTRAP_LEVEL: &str = "info";

/// Subscriber for events emitted while configuration is still loading.
///
/// Meant for `tracing::subscriber::set_default`; honours `RUST_LOG`.
pub fn bootstrap_subscriber() -> impl Subscriber + Send + Sync {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(BOOTSTRAP_LEVEL));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .finish()
}

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| AdvisorError::config(format!("Invalid log level: {}", e)))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| AdvisorError::config(format!("Failed to initialise logging: {}", e)))
}
