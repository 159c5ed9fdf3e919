//! Scoring module - cell values, legal options and totals.
//!
//! # Components
//!
//! - `ScoreCell` - Unset / numeric / forfeited cell state
//! - `Ruleset` - Point values of the special combinations
//! - `OptionGenerator` - Ordered legal values per category
//! - `ScoringEngine` - Totals, leaders and standing
//!
//! Everything here is pure: no I/O, no hidden state between calls.

mod engine;
mod options;
mod ruleset;
mod score_cell;

pub use engine::{ScoringEngine, Standing};
pub use options::OptionGenerator;
pub use ruleset::{Ruleset, DICE_PER_ROLL};
pub use score_cell::{ScoreCell, FORFEIT_TOKEN, UNSET_PLACEHOLDER};
