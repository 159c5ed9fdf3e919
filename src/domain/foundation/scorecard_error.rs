//! Scorecard-specific error types.
//!
//! Every failure here is an integration bug in the caller, never a transient
//! condition. Operations that the view can only ever invoke with valid input
//! (removing or moving a player) do not produce these errors at all.

use std::fmt;

use thiserror::Error;

use super::{DomainError, ErrorCode};

/// What kind of index was out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexTarget {
    Player,
    Category,
    Row,
}

impl fmt::Display for IndexTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IndexTarget::Player => "player",
            IndexTarget::Category => "category",
            IndexTarget::Row => "row",
        };
        write!(f, "{}", s)
    }
}

/// Errors raised by catalog lookups, option generation and roster mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScorecardError {
    /// An index outside `[0, len)` was supplied where validity is required.
    #[error("{target} index {index} is out of range (len {len})")]
    OutOfRange {
        target: IndexTarget,
        index: usize,
        len: usize,
    },

    /// Options were requested for a row that holds no score.
    #[error("row '{row}' has no selectable values")]
    NotSelectable { row: String },

    /// A score assignment outside the category's legal option set.
    #[error("value '{value}' is not a legal score for category {category}")]
    IllegalValue { category: usize, value: String },

    /// A roster sized for one catalog was paired with another.
    #[error("roster has {actual} categories per player but the catalog has {expected}")]
    CatalogMismatch { expected: usize, actual: usize },

    /// The audit trail could not be published.
    #[error("failed to publish scorecard event: {0}")]
    Publish(String),
}

impl ScorecardError {
    pub fn player_out_of_range(index: usize, len: usize) -> Self {
        ScorecardError::OutOfRange {
            target: IndexTarget::Player,
            index,
            len,
        }
    }

    pub fn category_out_of_range(index: usize, len: usize) -> Self {
        ScorecardError::OutOfRange {
            target: IndexTarget::Category,
            index,
            len,
        }
    }

    pub fn row_out_of_range(index: usize, len: usize) -> Self {
        ScorecardError::OutOfRange {
            target: IndexTarget::Row,
            index,
            len,
        }
    }

    pub fn not_selectable(row: impl Into<String>) -> Self {
        ScorecardError::NotSelectable { row: row.into() }
    }

    pub fn illegal_value(category: usize, value: impl fmt::Display) -> Self {
        ScorecardError::IllegalValue {
            category,
            value: value.to_string(),
        }
    }

    pub fn catalog_mismatch(expected: usize, actual: usize) -> Self {
        ScorecardError::CatalogMismatch { expected, actual }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ScorecardError::OutOfRange { .. } => ErrorCode::OutOfRange,
            ScorecardError::NotSelectable { .. } => ErrorCode::NotSelectable,
            ScorecardError::IllegalValue { .. } => ErrorCode::IllegalValue,
            ScorecardError::CatalogMismatch { .. } => ErrorCode::CatalogMismatch,
            ScorecardError::Publish(_) => ErrorCode::PublishFailed,
        }
    }
}

impl From<ScorecardError> for DomainError {
    fn from(err: ScorecardError) -> Self {
        let base = DomainError::new(err.code(), err.to_string());
        match err {
            ScorecardError::OutOfRange { target, index, len } => base
                .with_detail("target", target.to_string())
                .with_detail("index", index.to_string())
                .with_detail("len", len.to_string()),
            ScorecardError::NotSelectable { row } => base.with_detail("row", row),
            ScorecardError::IllegalValue { category, value } => base
                .with_detail("category", category.to_string())
                .with_detail("value", value),
            ScorecardError::CatalogMismatch { expected, actual } => base
                .with_detail("expected", expected.to_string())
                .with_detail("actual", actual.to_string()),
            ScorecardError::Publish(_) => base,
        }
    }
}

impl From<DomainError> for ScorecardError {
    fn from(err: DomainError) -> Self {
        ScorecardError::Publish(err.to_string())
    }
}
