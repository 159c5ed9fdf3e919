//! Event bus adapters.
//!
//! - `InMemoryEventBus` - Synchronous, in-process bus that records envelopes
//! - `NoopEventPublisher` - Discards events

mod in_memory;
mod noop;

pub use in_memory::InMemoryEventBus;
pub use noop::NoopEventPublisher;
