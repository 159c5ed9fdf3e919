//! Player entity - a display name and one score cell per category.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::CategoryId;
use crate::domain::scoring::ScoreCell;

/// One column of the score sheet.
///
/// Players have no identity beyond their position in the roster; names may
/// repeat or be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    scores: Vec<ScoreCell>,
}

impl Player {
    /// Creates a player with every cell unset.
    pub fn new(name: impl Into<String>, category_count: usize) -> Self {
        Self {
            name: name.into(),
            scores: vec![ScoreCell::Unset; category_count],
        }
    }

    /// Rebuilds a player from stored parts (no validation).
    pub(crate) fn reconstitute(name: String, scores: Vec<ScoreCell>) -> Self {
        Self { name, scores }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Score cells indexed by category id.
    pub fn scores(&self) -> &[ScoreCell] {
        &self.scores
    }

    /// Returns the cell for a category, if the id is in range.
    pub fn score(&self, category: CategoryId) -> Option<ScoreCell> {
        self.scores.get(category.index()).copied()
    }

    pub(crate) fn rename(&mut self, name: String) -> String {
        std::mem::replace(&mut self.name, name)
    }

    /// Replaces one cell and returns the previous value. The caller has
    /// already bounds-checked `category`.
    pub(crate) fn replace_score(&mut self, category: CategoryId, value: ScoreCell) -> ScoreCell {
        std::mem::replace(&mut self.scores[category.index()], value)
    }

    pub(crate) fn clear_scores(&mut self) {
        self.scores.iter_mut().for_each(|cell| *cell = ScoreCell::Unset);
    }
}
