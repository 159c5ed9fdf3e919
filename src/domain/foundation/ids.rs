//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for one scorecard session.
///
/// Events carry it as their aggregate id so a host juggling several tables
/// can tell their audit trails apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScorecardId(Uuid);

impl ScorecardId {
    /// Creates a new random ScorecardId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a ScorecardId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ScorecardId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ScorecardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ScorecardId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scorecard_id_generates_unique_values() {
        assert_ne!(ScorecardId::new(), ScorecardId::new());
    }

    #[test]
    fn scorecard_id_parses_from_string() {
        let uuid = Uuid::new_v4();
        let id: ScorecardId = uuid.to_string().parse().unwrap();
        assert_eq!(id.as_uuid(), &uuid);
    }

    #[test]
    fn scorecard_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<ScorecardId>().is_err());
    }

    #[test]
    fn scorecard_id_serializes_as_plain_string() {
        let uuid = Uuid::new_v4();
        let id = ScorecardId::from_uuid(uuid);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", uuid));
    }
}
