//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, event infrastructure and error types
//! that form the vocabulary of the scorecard domain.

mod errors;
mod events;
mod ids;
mod scorecard_error;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{domain_event, DomainEvent, EventEnvelope, EventId, EventMetadata};
pub use ids::ScorecardId;
pub use scorecard_error::{IndexTarget, ScorecardError};
pub use timestamp::Timestamp;
