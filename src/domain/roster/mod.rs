//! Roster domain module.
//!
//! The ordered list of players and their score vectors, with the pure
//! operations that derive one roster snapshot from the previous one.
//!
//! # Events
//!
//! - `PlayerAdded`, `PlayerRemoved`, `PlayerMoved`, `PlayerRenamed`
//! - `ScoreRecorded`, `ScoreCleared`, `ScoresReset`

mod events;
mod player;
#[allow(clippy::module_inception)]
mod roster;

pub use events::{
    PlayerAdded, PlayerMoved, PlayerRemoved, PlayerRenamed, ScoreCleared, ScoreRecorded,
    ScoresReset,
};
pub use player::Player;
pub use roster::{MoveDirection, Roster, DEFAULT_NAME_PREFIX};
