//! Ruleset configuration
//!
//! House variants score the special combinations differently. A YAML file
//! with the same keys as `Ruleset` replaces the canonical table:
//!
//! ```yaml
//! straight: [20, 25]
//! full_house: [30, 35]
//! four_of_a_kind: [40, 45]
//! generala: [50, 60]
//! double_generala: [100, 120]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::error::ConfigError;
use crate::domain::scoring::Ruleset;

/// Where the special-combination table comes from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RulesetConfig {
    /// YAML file overriding the canonical table
    pub path: Option<PathBuf>,
}

impl RulesetConfig {
    /// Reads the configured table, or the canonical one when no file is set.
    ///
    /// # Errors
    ///
    /// - `Io` if the file cannot be read
    /// - `Yaml` if it is not a valid ruleset document
    /// - `ValidationFailed` if the table breaks a ruleset invariant
    pub fn resolve(&self) -> Result<Ruleset, ConfigError> {
        match &self.path {
            Some(path) => load_ruleset_file(path),
            None => Ok(Ruleset::canonical()),
        }
    }
}

fn load_ruleset_file(path: &Path) -> Result<Ruleset, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let ruleset: Ruleset = serde_yaml::from_str(&contents).map_err(|source| ConfigError::Yaml {
        path: path.to_path_buf(),
        source,
    })?;
    ruleset
        .validate()
        .map_err(super::error::ValidationError::from)?;
    Ok(ruleset)
}
