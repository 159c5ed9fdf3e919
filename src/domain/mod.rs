//! Domain layer containing the scorecard rules and types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, events, errors)
//! - `catalog` - Fixed, ordered category catalog
//! - `scoring` - Cell values, legal options, totals and leaders
//! - `roster` - Players, roster operations and their events
//! - `sheet` - Table view model built from a roster snapshot

pub mod catalog;
pub mod foundation;
pub mod roster;
pub mod scoring;
pub mod sheet;
