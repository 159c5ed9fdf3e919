//! Roster configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::roster::DEFAULT_NAME_PREFIX;

/// Starting players and the auto-naming scheme for new ones
#[derive(Debug, Clone, Deserialize)]
pub struct RosterConfig {
    /// Names of the players present when a scorecard opens
    #[serde(default = "default_initial_players")]
    pub initial_players: Vec<String>,

    /// Prefix for auto-generated names ("Player" gives "Player 3")
    #[serde(default = "default_name_prefix")]
    pub name_prefix: String,
}

impl RosterConfig {
    /// Validate roster configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name_prefix.trim().is_empty() {
            return Err(ValidationError::BlankNamePrefix);
        }
        Ok(())
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            initial_players: default_initial_players(),
            name_prefix: default_name_prefix(),
        }
    }
}

fn default_initial_players() -> Vec<String> {
    vec![
        format!("{} 1", DEFAULT_NAME_PREFIX),
        format!("{} 2", DEFAULT_NAME_PREFIX),
    ]
}

fn default_name_prefix() -> String {
    DEFAULT_NAME_PREFIX.to_string()
}
