//! ScoreCell - the value recorded for one (player, category) pair.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Token a score sheet shows for a forfeited cell.
pub const FORFEIT_TOKEN: &str = "x";

/// Text shown in place of an empty cell.
pub const UNSET_PLACEHOLDER: &str = "—";

/// Recorded state of one cell.
///
/// Cells move `Unset -> Numeric | Forfeited` through score assignment and
/// return to `Unset` only by clearing or a full reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "points", rename_all = "snake_case")]
pub enum ScoreCell {
    /// Nothing recorded yet.
    #[default]
    Unset,
    /// Points scored.
    Numeric(u32),
    /// The player declined to score here. Counts as zero.
    Forfeited,
}

impl ScoreCell {
    /// Points this cell contributes to the total.
    pub fn points(&self) -> u32 {
        match self {
            ScoreCell::Numeric(n) => *n,
            ScoreCell::Unset | ScoreCell::Forfeited => 0,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, ScoreCell::Unset)
    }

    /// True once the cell holds a number or a forfeit.
    pub fn is_recorded(&self) -> bool {
        !self.is_unset()
    }

    /// Text for a sheet cell, with a dash in place of an empty cell.
    pub fn placeholder(&self) -> String {
        match self {
            ScoreCell::Unset => UNSET_PLACEHOLDER.to_string(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for ScoreCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreCell::Unset => Ok(()),
            ScoreCell::Numeric(n) => write!(f, "{}", n),
            ScoreCell::Forfeited => write!(f, "{}", FORFEIT_TOKEN),
        }
    }
}

impl FromStr for ScoreCell {
    type Err = ValidationError;

    /// Parses a sheet token: empty, `x`, or a non-negative integer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.is_empty() {
            return Ok(ScoreCell::Unset);
        }
        if token.eq_ignore_ascii_case(FORFEIT_TOKEN) {
            return Ok(ScoreCell::Forfeited);
        }
        token
            .parse::<u32>()
            .map(ScoreCell::Numeric)
            .map_err(|_| {
                ValidationError::invalid_format(
                    "score",
                    format!("expected a number or '{}', got '{}'", FORFEIT_TOKEN, token),
                )
            })
    }
}
