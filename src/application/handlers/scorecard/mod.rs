//! Scorecard command handling.

mod command;
mod session;

pub use command::{CommandOutcome, ScorecardCommand};
pub use session::ScorecardSession;
