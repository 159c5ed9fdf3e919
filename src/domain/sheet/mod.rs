//! Score sheet view model.
//!
//! The table a view renders: one column per player, one row per category,
//! and a derived total row that marks the leaders.

mod score_sheet;

pub use score_sheet::{CategoryRow, LeaderMarker, PlayerColumn, ScoreSheet, TotalCell};
