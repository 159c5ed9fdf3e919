//! Ports - trait seams between the scorecard and its host.

mod event_publisher;

pub use event_publisher::EventPublisher;
