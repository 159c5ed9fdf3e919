//! In-memory event bus implementation.
//!
//! Captures every published envelope in order so hosts and tests can inspect
//! the audit trail of a scorecard session.

use std::sync::{PoisonError, RwLock};

use tracing::trace;

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::ports::EventPublisher;

/// In-memory event bus.
///
/// Features:
/// - Synchronous delivery (deterministic for tests)
/// - Event capture for assertions
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use generala_scorecard::adapters::InMemoryEventBus;
/// use generala_scorecard::application::{ScorecardCommand, ScorecardSession};
/// use generala_scorecard::domain::roster::Roster;
/// use generala_scorecard::domain::scoring::OptionGenerator;
///
/// let bus = Arc::new(InMemoryEventBus::new());
/// let mut session = ScorecardSession::new(
///     OptionGenerator::standard().clone(),
///     Roster::standard(["Ana"]),
///     bus.clone(),
/// );
///
/// session
///     .execute(ScorecardCommand::AddPlayer { name: None })
///     .unwrap();
/// assert!(bus.has_event("scorecard.player_added.v1"));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryEventBus {
    published: RwLock<Vec<EventEnvelope>>,
}

impl InMemoryEventBus {
    /// Creates a new empty event bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all published events in publication order.
    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns events of a specific type.
    pub fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.published_events()
            .into_iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }

    /// Returns events for a specific aggregate.
    pub fn events_for_aggregate(&self, aggregate_id: &str) -> Vec<EventEnvelope> {
        self.published_events()
            .into_iter()
            .filter(|e| e.aggregate_id == aggregate_id)
            .collect()
    }

    /// Clears all published events.
    pub fn clear(&self) {
        self.published
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Returns count of published events.
    pub fn event_count(&self) -> usize {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Checks if a specific event type was published.
    pub fn has_event(&self, event_type: &str) -> bool {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|e| e.event_type == event_type)
    }
}

impl EventPublisher for InMemoryEventBus {
    fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        trace!(event_type = %event.event_type, event_id = %event.event_id, "captured event");
        self.published
            .write()
            .map_err(|_| {
                DomainError::new(ErrorCode::InternalError, "InMemoryEventBus lock poisoned")
            })?
            .push(event);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_envelope(event_type: &str, aggregate_id: &str) -> EventEnvelope {
        EventEnvelope::new(event_type, aggregate_id, "Test", json!({}))
    }

    #[test]
    fn publish_stores_event() {
        let bus = InMemoryEventBus::new();

        bus.publish(test_envelope("test.event", "agg-1")).unwrap();

        assert_eq!(bus.event_count(), 1);
        assert!(bus.has_event("test.event"));
        assert!(!bus.has_event("other.event"));
    }

    #[test]
    fn events_of_type_filters_correctly() {
        let bus = InMemoryEventBus::new();

        bus.publish(test_envelope("type.a", "1")).unwrap();
        bus.publish(test_envelope("type.b", "2")).unwrap();
        bus.publish(test_envelope("type.a", "3")).unwrap();

        assert_eq!(bus.events_of_type("type.a").len(), 2);
    }

    #[test]
    fn events_for_aggregate_filters_correctly() {
        let bus = InMemoryEventBus::new();

        bus.publish(test_envelope("type.a", "agg-1")).unwrap();
        bus.publish(test_envelope("type.b", "agg-2")).unwrap();
        bus.publish(test_envelope("type.c", "agg-1")).unwrap();

        assert_eq!(bus.events_for_aggregate("agg-1").len(), 2);
    }

    #[test]
    fn publish_all_keeps_order() {
        let bus = InMemoryEventBus::new();
        bus.publish_all(vec![
            test_envelope("first", "a"),
            test_envelope("second", "a"),
        ])
        .unwrap();

        let types: Vec<String> = bus
            .published_events()
            .into_iter()
            .map(|e| e.event_type)
            .collect();
        assert_eq!(types, vec!["first", "second"]);
    }

    #[test]
    fn clear_removes_all_events() {
        let bus = InMemoryEventBus::new();
        bus.publish(test_envelope("test.event", "agg-1")).unwrap();

        bus.clear();

        assert_eq!(bus.event_count(), 0);
    }
}
