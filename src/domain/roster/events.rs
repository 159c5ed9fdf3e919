//! Scorecard domain events.
//!
//! One event per state-changing roster operation:
//! - `PlayerAdded` - Player appended
//! - `PlayerRemoved` - Player deleted
//! - `PlayerMoved` - Player swapped with a neighbour
//! - `PlayerRenamed` - Player display name changed
//! - `ScoreRecorded` - Cell set to a number or forfeit
//! - `ScoreCleared` - Cell returned to unset
//! - `ScoresReset` - Every cell returned to unset

use serde::{Deserialize, Serialize};

use crate::domain::catalog::CategoryId;
use crate::domain::foundation::{domain_event, EventId, ScorecardId, Timestamp};
use crate::domain::scoring::ScoreCell;

// ════════════════════════════════════════════════════════════════════════════
// PlayerAdded
// ════════════════════════════════════════════════════════════════════════════

/// Published when a player is appended to the roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerAdded {
    pub event_id: EventId,
    pub scorecard_id: ScorecardId,

    /// Position of the new player (always the last column).
    pub index: usize,

    pub name: String,
    pub added_at: Timestamp,
}

domain_event!(
    PlayerAdded,
    event_type = "scorecard.player_added.v1",
    schema_version = 1,
    aggregate_id = scorecard_id,
    aggregate_type = "Scorecard",
    occurred_at = added_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// PlayerRemoved
// ════════════════════════════════════════════════════════════════════════════

/// Published when a player is deleted along with their scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRemoved {
    pub event_id: EventId,
    pub scorecard_id: ScorecardId,
    pub index: usize,
    pub name: String,

    /// Total the player had when removed.
    pub final_total: u32,

    pub removed_at: Timestamp,
}

domain_event!(
    PlayerRemoved,
    event_type = "scorecard.player_removed.v1",
    schema_version = 1,
    aggregate_id = scorecard_id,
    aggregate_type = "Scorecard",
    occurred_at = removed_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// PlayerMoved
// ════════════════════════════════════════════════════════════════════════════

/// Published when two neighbouring players swap columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerMoved {
    pub event_id: EventId,
    pub scorecard_id: ScorecardId,
    pub from: usize,
    pub to: usize,
    pub moved_at: Timestamp,
}

domain_event!(
    PlayerMoved,
    event_type = "scorecard.player_moved.v1",
    schema_version = 1,
    aggregate_id = scorecard_id,
    aggregate_type = "Scorecard",
    occurred_at = moved_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// PlayerRenamed
// ════════════════════════════════════════════════════════════════════════════

/// Published when a player's display name changes.
///
/// Captures both old and new name for audit trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRenamed {
    pub event_id: EventId,
    pub scorecard_id: ScorecardId,
    pub index: usize,
    pub old_name: String,
    pub new_name: String,
    pub renamed_at: Timestamp,
}

domain_event!(
    PlayerRenamed,
    event_type = "scorecard.player_renamed.v1",
    schema_version = 1,
    aggregate_id = scorecard_id,
    aggregate_type = "Scorecard",
    occurred_at = renamed_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// ScoreRecorded
// ════════════════════════════════════════════════════════════════════════════

/// Published when a cell is set to a number or a forfeit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRecorded {
    pub event_id: EventId,
    pub scorecard_id: ScorecardId,
    pub player_index: usize,
    pub category: CategoryId,
    pub previous: ScoreCell,
    pub value: ScoreCell,
    pub recorded_at: Timestamp,
}

domain_event!(
    ScoreRecorded,
    event_type = "scorecard.score_recorded.v1",
    schema_version = 1,
    aggregate_id = scorecard_id,
    aggregate_type = "Scorecard",
    occurred_at = recorded_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// ScoreCleared
// ════════════════════════════════════════════════════════════════════════════

/// Published when a single cell is returned to unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreCleared {
    pub event_id: EventId,
    pub scorecard_id: ScorecardId,
    pub player_index: usize,
    pub category: CategoryId,
    pub previous: ScoreCell,
    pub cleared_at: Timestamp,
}

domain_event!(
    ScoreCleared,
    event_type = "scorecard.score_cleared.v1",
    schema_version = 1,
    aggregate_id = scorecard_id,
    aggregate_type = "Scorecard",
    occurred_at = cleared_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// ScoresReset
// ════════════════════════════════════════════════════════════════════════════

/// Published when the whole sheet is wiped for a new game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoresReset {
    pub event_id: EventId,
    pub scorecard_id: ScorecardId,
    pub player_count: usize,
    pub reset_at: Timestamp,
}

domain_event!(
    ScoresReset,
    event_type = "scorecard.scores_reset.v1",
    schema_version = 1,
    aggregate_id = scorecard_id,
    aggregate_type = "Scorecard",
    occurred_at = reset_at,
    event_id = event_id
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainEvent, EventEnvelope};

    #[test]
    fn score_recorded_envelope_carries_cells() {
        let scorecard_id = ScorecardId::new();
        let event = ScoreRecorded {
            event_id: EventId::new(),
            scorecard_id,
            player_index: 1,
            category: CategoryId::new(9),
            previous: ScoreCell::Unset,
            value: ScoreCell::Numeric(60),
            recorded_at: Timestamp::now(),
        };

        let envelope = EventEnvelope::from_event(&event).unwrap();

        assert_eq!(envelope.event_type, "scorecard.score_recorded.v1");
        assert_eq!(envelope.aggregate_type, "Scorecard");
        assert_eq!(envelope.aggregate_id, scorecard_id.to_string());
        assert_eq!(envelope.payload["category"], 9);
        assert_eq!(envelope.payload["value"]["points"], 60);
        assert_eq!(envelope.payload["previous"]["state"], "unset");
    }

    #[test]
    fn event_types_share_scorecard_prefix() {
        let event = ScoresReset {
            event_id: EventId::new(),
            scorecard_id: ScorecardId::new(),
            player_count: 4,
            reset_at: Timestamp::now(),
        };
        assert!(event.event_type().starts_with("scorecard."));
        assert_eq!(event.schema_version(), 1);
    }
}
