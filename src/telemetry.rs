//! # Telemetry
//!
//! Tracing subscriber setup.
//!
//! `RUST_LOG` takes precedence over the configured level.

use crate::application::error::InfrastructureError;
use crate::config::{LogFormat, LoggingConfig};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Builds the event filter for `config`.
///
/// # Errors
///
/// Returns `InfrastructureError::Configuration` if neither `RUST_LOG` nor
/// the configured level is a valid filter directive.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter, InfrastructureError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| InfrastructureError::configuration(format!("logging.level: {e}")))
}

/// Installs the global tracing subscriber.
///
/// # Errors
///
/// Returns `InfrastructureError::Configuration` if the filter is invalid or
/// a global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), InfrastructureError> {
    let registry = tracing_subscriber::registry().with(env_filter(config)?);

    let installed = match config.format {
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).try_init(),
    };

    installed.map_err(|e| InfrastructureError::configuration(format!("tracing: {e}")))
}
