//! EventPublisher port - Interface for publishing domain events.
//!
//! This port defines how the scorecard hands its audit trail to the host
//! without knowing about the underlying transport.

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Port for publishing domain events.
///
/// Implementations must ensure:
/// - `publish` returns only after the envelope has been accepted
/// - `publish_all` keeps the given order
/// - Errors are propagated to the caller
///
/// Publishing is synchronous: scorecard operations complete before the next
/// user action is processed, so there is nothing to await.
pub trait EventPublisher: Send + Sync {
    /// Publish a single event.
    fn publish(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Publish multiple events in order.
    fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        events.into_iter().try_for_each(|event| self.publish(event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use serde_json::json;
    use std::sync::Mutex;

    // Compile-time check that trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn EventPublisher) {}

    struct FailsOnSecond {
        seen: Mutex<usize>,
    }

    impl EventPublisher for FailsOnSecond {
        fn publish(&self, _event: EventEnvelope) -> Result<(), DomainError> {
            let mut seen = self.seen.lock().unwrap();
            *seen += 1;
            if *seen == 2 {
                return Err(DomainError::new(ErrorCode::PublishFailed, "second event rejected"));
            }
            Ok(())
        }
    }

    #[test]
    fn publish_all_stops_at_first_error() {
        let publisher = FailsOnSecond {
            seen: Mutex::new(0),
        };
        let events = (0..3)
            .map(|i| EventEnvelope::new("test.event.v1", format!("agg-{}", i), "Test", json!({})))
            .collect();

        assert!(publisher.publish_all(events).is_err());
        assert_eq!(*publisher.seen.lock().unwrap(), 2);
    }
}
