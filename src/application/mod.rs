//! Application layer - Commands and handlers.
//!
//! This layer orchestrates domain operations and hands the resulting events
//! to the publishing port.

pub mod handlers;

pub use handlers::{CommandOutcome, ScorecardCommand, ScorecardSession};
