//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `GENERALA` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use generala_scorecard::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Opening with {} players", config.roster.initial_players.len());
//! ```

mod error;
mod logging;
mod roster;
mod ruleset;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use roster::RosterConfig;
pub use ruleset::RulesetConfig;

use serde::Deserialize;

use crate::domain::scoring::Ruleset;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// two-player scorecard with the canonical ruleset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Starting players and auto-naming
    #[serde(default)]
    pub roster: RosterConfig,

    /// Special-combination point table
    #[serde(default)]
    pub ruleset: RulesetConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `GENERALA` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `GENERALA__ROSTER__NAME_PREFIX=Jugador` -> `roster.name_prefix = "Jugador"`
    /// - `GENERALA__ROSTER__INITIAL_PLAYERS=Ana,Beto` -> `roster.initial_players = ["Ana", "Beto"]`
    /// - `GENERALA__RULESET__PATH=house.yaml` -> `ruleset.path = "house.yaml"`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("GENERALA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("roster.initial_players"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        self.roster.validate()?;
        Ok(())
    }

    /// The special-combination table this configuration selects.
    ///
    /// # Errors
    ///
    /// See [`RulesetConfig::resolve`].
    pub fn resolve_ruleset(&self) -> Result<Ruleset, ConfigError> {
        self.ruleset.resolve()
    }
}
