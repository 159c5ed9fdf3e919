//! Adapters - in-process implementations of the ports.

pub mod events;

pub use events::{InMemoryEventBus, NoopEventPublisher};
