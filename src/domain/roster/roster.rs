//! Roster aggregate - the ordered players of one score sheet.
//!
//! Every operation takes `&self` and returns the next roster; the receiver is
//! never modified, so the host always derives the next snapshot from the one
//! it currently holds.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{CategoryCatalog, CategoryId};
use crate::domain::foundation::{ScorecardError, ValidationError};
use crate::domain::scoring::ScoreCell;

use super::Player;

/// Name prefix used for auto-named players ("Player 3").
pub const DEFAULT_NAME_PREFIX: &str = "Player";

/// Direction for swapping a player with a neighbour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveDirection {
    Left,
    Right,
}

impl MoveDirection {
    /// Signed position offset (-1 or +1).
    pub fn offset(&self) -> isize {
        match self {
            MoveDirection::Left => -1,
            MoveDirection::Right => 1,
        }
    }
}

impl TryFrom<i32> for MoveDirection {
    type Error = ValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(MoveDirection::Left),
            1 => Ok(MoveDirection::Right),
            other => Err(ValidationError::out_of_range(
                "direction",
                -1,
                1,
                i64::from(other),
            )),
        }
    }
}

/// Ordered players plus the category count their score vectors must match.
///
/// # Invariants
///
/// - every player has exactly `category_count` score cells
/// - order is the display order; identity is positional
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RosterSnapshot")]
pub struct Roster {
    category_count: usize,
    players: Vec<Player>,
}

impl Roster {
    /// Creates a roster with no players.
    pub fn empty(category_count: usize) -> Self {
        Self {
            category_count,
            players: Vec::new(),
        }
    }

    /// Creates a roster of fresh players with the given names.
    pub fn with_players<I, S>(names: I, category_count: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category_count,
            players: names
                .into_iter()
                .map(|name| Player::new(name, category_count))
                .collect(),
        }
    }

    /// Creates a roster sized for the standard catalog.
    pub fn standard<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_players(names, CategoryCatalog::standard().len())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn category_count(&self) -> usize {
        self.category_count
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Reads one cell.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if the player or category index is invalid
    pub fn score(&self, player: usize, category: CategoryId) -> Result<ScoreCell, ScorecardError> {
        self.check_category(category)?;
        let player = self
            .player(player)
            .ok_or_else(|| ScorecardError::player_out_of_range(player, self.len()))?;
        Ok(player.scores()[category.index()])
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Appends a player named "Player N", N being the new roster length.
    pub fn add_player(&self) -> Roster {
        self.add_player_named(format!("{} {}", DEFAULT_NAME_PREFIX, self.len() + 1))
    }

    /// Appends a player with the given name and an all-unset score vector.
    pub fn add_player_named(&self, name: impl Into<String>) -> Roster {
        let mut next = self.clone();
        next.players.push(Player::new(name, self.category_count));
        next
    }

    /// Deletes the player at `index`; later players shift down by one.
    ///
    /// An out-of-range index returns the roster unchanged.
    pub fn remove_player(&self, index: usize) -> Roster {
        let mut next = self.clone();
        if index < next.players.len() {
            next.players.remove(index);
        }
        next
    }

    /// Swaps the player at `index` with its neighbour in `direction`.
    ///
    /// Moving the first player left, the last player right, or an index that
    /// does not exist returns the roster unchanged.
    pub fn move_player(&self, index: usize, direction: MoveDirection) -> Roster {
        let mut next = self.clone();
        if let Some(target) = self.neighbour(index, direction) {
            next.players.swap(index, target);
        }
        next
    }

    /// Position the player at `index` would move to, if the move is possible.
    pub fn neighbour(&self, index: usize, direction: MoveDirection) -> Option<usize> {
        if index >= self.len() {
            return None;
        }
        index
            .checked_add_signed(direction.offset())
            .filter(|target| *target < self.len())
    }

    /// Replaces the name at `index`. Any string is accepted, including empty.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if no player is at `index`
    pub fn rename_player(
        &self,
        index: usize,
        name: impl Into<String>,
    ) -> Result<Roster, ScorecardError> {
        let mut next = self.clone();
        next.player_mut(index)?.rename(name.into());
        Ok(next)
    }

    /// Records `value` in one cell, replacing whatever was there.
    ///
    /// Membership in the category's option set is the caller's concern; see
    /// `OptionGenerator::validate`.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if the player or category index is invalid
    /// - `IllegalValue` if `value` is `Unset` (use `clear_score`)
    pub fn set_score(
        &self,
        player: usize,
        category: CategoryId,
        value: ScoreCell,
    ) -> Result<Roster, ScorecardError> {
        self.check_category(category)?;
        if value.is_unset() {
            return Err(ScorecardError::illegal_value(category.index(), value.placeholder()));
        }

        let mut next = self.clone();
        next.player_mut(player)?.replace_score(category, value);
        Ok(next)
    }

    /// Returns one cell to `Unset`.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if the player or category index is invalid
    pub fn clear_score(&self, player: usize, category: CategoryId) -> Result<Roster, ScorecardError> {
        self.check_category(category)?;

        let mut next = self.clone();
        next.player_mut(player)?.replace_score(category, ScoreCell::Unset);
        Ok(next)
    }

    /// Every cell of every player back to `Unset`; names and order are kept.
    pub fn reset_all_scores(&self) -> Roster {
        let mut next = self.clone();
        next.players.iter_mut().for_each(Player::clear_scores);
        next
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn check_category(&self, category: CategoryId) -> Result<(), ScorecardError> {
        if category.index() < self.category_count {
            Ok(())
        } else {
            Err(ScorecardError::category_out_of_range(
                category.index(),
                self.category_count,
            ))
        }
    }

    fn player_mut(&mut self, index: usize) -> Result<&mut Player, ScorecardError> {
        let len = self.players.len();
        self.players
            .get_mut(index)
            .ok_or_else(|| ScorecardError::player_out_of_range(index, len))
    }
}

/// Wire shape of a roster, checked before it becomes a `Roster`.
#[derive(Deserialize)]
struct RosterSnapshot {
    category_count: usize,
    players: Vec<PlayerSnapshot>,
}

#[derive(Deserialize)]
struct PlayerSnapshot {
    name: String,
    scores: Vec<ScoreCell>,
}

impl TryFrom<RosterSnapshot> for Roster {
    type Error = ValidationError;

    fn try_from(snapshot: RosterSnapshot) -> Result<Self, Self::Error> {
        let expected = snapshot.category_count;
        let players = snapshot
            .players
            .into_iter()
            .map(|p| {
                if p.scores.len() == expected {
                    Ok(Player::reconstitute(p.name, p.scores))
                } else {
                    Err(ValidationError::out_of_range(
                        "scores",
                        expected as i64,
                        expected as i64,
                        p.scores.len() as i64,
                    ))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            category_count: expected,
            players,
        })
    }
}
