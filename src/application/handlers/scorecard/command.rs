//! Commands accepted by a scorecard session.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::CategoryId;
use crate::domain::foundation::EventEnvelope;
use crate::domain::roster::{MoveDirection, Roster};
use crate::domain::scoring::ScoreCell;

/// One user action against the score sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ScorecardCommand {
    /// Append a player. Without a name one is generated from the session prefix.
    AddPlayer { name: Option<String> },
    RemovePlayer { index: usize },
    MovePlayer { index: usize, direction: MoveDirection },
    RenamePlayer { index: usize, name: String },
    /// Record a number or a forfeit; the value must be one of the category's options.
    SetScore {
        player: usize,
        category: CategoryId,
        value: ScoreCell,
    },
    ClearScore { player: usize, category: CategoryId },
    ResetScores,
}

impl ScorecardCommand {
    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            ScorecardCommand::AddPlayer { .. } => "add_player",
            ScorecardCommand::RemovePlayer { .. } => "remove_player",
            ScorecardCommand::MovePlayer { .. } => "move_player",
            ScorecardCommand::RenamePlayer { .. } => "rename_player",
            ScorecardCommand::SetScore { .. } => "set_score",
            ScorecardCommand::ClearScore { .. } => "clear_score",
            ScorecardCommand::ResetScores => "reset_scores",
        }
    }
}

/// Result of a successfully executed command.
#[derive(Debug, Clone)]
pub struct CommandOutcome {
    /// Roster snapshot after the command.
    pub roster: Roster,

    /// Published event, or `None` when the command changed nothing.
    pub event: Option<EventEnvelope>,

    /// Correlation id the event (if any) was tagged with.
    pub correlation_id: String,
}

impl CommandOutcome {
    pub fn is_noop(&self) -> bool {
        self.event.is_none()
    }
}
