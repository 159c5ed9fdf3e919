//! Publisher that drops every event.

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::EventPublisher;

/// For hosts that keep the roster but have no use for its audit trail.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopEventPublisher;

impl EventPublisher for NoopEventPublisher {
    fn publish(&self, _event: EventEnvelope) -> Result<(), DomainError> {
        Ok(())
    }
}
