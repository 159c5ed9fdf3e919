//! Tracing subscriber setup.
//!
//! Hosts call [`init`] once at startup; the library itself only emits
//! `tracing` events and never installs a subscriber on its own.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LoggingConfig, ValidationError};

/// Installs the global subscriber described by `config`.
///
/// `RUST_LOG`, when set, takes precedence over `config.level`. Returns
/// `Ok(false)` if a global subscriber was already installed.
///
/// # Errors
///
/// - `InvalidLogFilter` if the configured directive does not parse
pub fn init(config: &LoggingConfig) -> Result<bool, ValidationError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| ValidationError::InvalidLogFilter(e.to_string()))?;

    let json = config.json.then(|| tracing_subscriber::fmt::layer().json());
    let plain = (!config.json).then(|| tracing_subscriber::fmt::layer());

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(plain)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(json = config.json, level = %config.level, "tracing initialised");
    }
    Ok(installed)
}
