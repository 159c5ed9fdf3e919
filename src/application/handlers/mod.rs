//! Command handlers.

pub mod scorecard;

pub use scorecard::{CommandOutcome, ScorecardCommand, ScorecardSession};
