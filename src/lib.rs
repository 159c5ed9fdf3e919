//! Generala Scorecard - score sheet state engine for the Generala dice game
//!
//! This crate models the paper score sheet: a fixed catalog of eleven scoring
//! categories, the legal values of each, an ordered roster of players and
//! their cells, and the totals that decide who is ahead.
//!
//! # Layers
//!
//! - `domain` - Catalog, scoring rules, roster operations and the sheet view
//! - `application` - `ScorecardSession`, which executes commands and publishes events
//! - `ports` / `adapters` - Event publishing seam and in-process implementations
//! - `config` / `telemetry` - Environment configuration and tracing setup
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use generala_scorecard::adapters::InMemoryEventBus;
//! use generala_scorecard::application::{ScorecardCommand, ScorecardSession};
//! use generala_scorecard::domain::catalog::CategoryId;
//! use generala_scorecard::domain::roster::Roster;
//! use generala_scorecard::domain::scoring::{OptionGenerator, ScoreCell, Standing};
//!
//! let bus = Arc::new(InMemoryEventBus::new());
//! let mut session = ScorecardSession::new(
//!     OptionGenerator::standard().clone(),
//!     Roster::standard(["Ana", "Beto"]),
//!     bus.clone(),
//! );
//!
//! session
//!     .execute(ScorecardCommand::SetScore {
//!         player: 1,
//!         category: CategoryId::new(9),
//!         value: ScoreCell::Numeric(60),
//!     })
//!     .unwrap();
//!
//! assert_eq!(session.standing(), Standing::Winner(1));
//! assert_eq!(bus.event_count(), 1);
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
