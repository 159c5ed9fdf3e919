//! ScorecardSession - Command handler owning the live roster snapshot.

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::{AppConfig, ConfigError};
use crate::domain::catalog::CategoryCatalog;
use crate::domain::foundation::{
    DomainEvent, EventEnvelope, EventId, ScorecardError, ScorecardId, Timestamp,
};
use crate::domain::roster::{
    PlayerAdded, PlayerMoved, PlayerRemoved, PlayerRenamed, Roster, ScoreCleared, ScoreRecorded,
    ScoresReset, DEFAULT_NAME_PREFIX,
};
use crate::domain::scoring::{OptionGenerator, ScoringEngine, Standing};
use crate::domain::sheet::ScoreSheet;
use crate::ports::EventPublisher;

use super::{CommandOutcome, ScorecardCommand};

/// Applies commands to one scorecard and publishes what changed.
///
/// The session holds the current snapshot; each command derives the next
/// snapshot through the pure roster operations and swaps it in only after
/// the event has been published. A command that leaves the roster unchanged
/// publishes nothing.
pub struct ScorecardSession {
    id: ScorecardId,
    roster: Roster,
    generator: OptionGenerator,
    name_prefix: String,
    event_publisher: Arc<dyn EventPublisher>,
}

impl ScorecardSession {
    pub fn new(
        generator: OptionGenerator,
        roster: Roster,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            id: ScorecardId::new(),
            roster,
            generator,
            name_prefix: DEFAULT_NAME_PREFIX.to_string(),
            event_publisher,
        }
    }

    /// Session over the standard catalog with the configured players and ruleset.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the configuration is invalid
    /// - `Io` / `Yaml` if the ruleset file cannot be loaded
    pub fn from_config(
        config: &AppConfig,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let ruleset = config.resolve_ruleset()?;
        let catalog = CategoryCatalog::standard().clone();
        let roster = Roster::with_players(config.roster.initial_players.clone(), catalog.len());

        debug!(
            players = roster.len(),
            name_prefix = %config.roster.name_prefix,
            "scorecard session configured"
        );

        Ok(Self::new(OptionGenerator::new(catalog, ruleset), roster, event_publisher)
            .with_name_prefix(config.roster.name_prefix.clone()))
    }

    pub fn with_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = prefix.into();
        self
    }

    pub fn id(&self) -> ScorecardId {
        self.id
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn generator(&self) -> &OptionGenerator {
        &self.generator
    }

    pub fn standing(&self) -> Standing {
        ScoringEngine::standing(&self.roster)
    }

    /// Rendered view of the current snapshot.
    pub fn sheet(&self) -> Result<ScoreSheet, ScorecardError> {
        ScoreSheet::build(&self.generator, &self.roster)
    }

    /// Applies one command under a freshly generated correlation id.
    ///
    /// # Errors
    ///
    /// See [`ScorecardSession::execute_correlated`].
    pub fn execute(&mut self, command: ScorecardCommand) -> Result<CommandOutcome, ScorecardError> {
        self.execute_correlated(command, Uuid::new_v4().to_string())
    }

    /// Applies one command, tagging its event with `correlation_id`.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` for a bad player or category index where one is required
    /// - `IllegalValue` if `SetScore` carries a value not offered for the category
    /// - `Publish` if the event could not be published; the roster is left as it was
    pub fn execute_correlated(
        &mut self,
        command: ScorecardCommand,
        correlation_id: impl Into<String>,
    ) -> Result<CommandOutcome, ScorecardError> {
        let correlation_id = correlation_id.into();
        debug!(
            scorecard_id = %self.id,
            %correlation_id,
            command = command.name(),
            "executing command"
        );

        let (next, event) = match command {
            ScorecardCommand::AddPlayer { name } => self.add_player(name)?,
            ScorecardCommand::RemovePlayer { index } => self.remove_player(index)?,
            ScorecardCommand::MovePlayer { index, direction } => {
                let next = self.roster.move_player(index, direction);
                let event = match self.roster.neighbour(index, direction) {
                    Some(to) => Some(envelope(&PlayerMoved {
                        event_id: EventId::new(),
                        scorecard_id: self.id,
                        from: index,
                        to,
                        moved_at: Timestamp::now(),
                    })?),
                    None => None,
                };
                (next, event)
            }
            ScorecardCommand::RenamePlayer { index, name } => {
                let next = self.roster.rename_player(index, name.clone())?;
                let old_name = self.player_name(index);
                let event = envelope(&PlayerRenamed {
                    event_id: EventId::new(),
                    scorecard_id: self.id,
                    index,
                    old_name,
                    new_name: name,
                    renamed_at: Timestamp::now(),
                })?;
                (next, Some(event))
            }
            ScorecardCommand::SetScore {
                player,
                category,
                value,
            } => {
                let previous = self.roster.score(player, category)?;
                if let Err(err) = self.generator.validate(category, value) {
                    warn!(scorecard_id = %self.id, player, %category, %value, "rejected score");
                    return Err(err);
                }
                let next = self.roster.set_score(player, category, value)?;
                let event = envelope(&ScoreRecorded {
                    event_id: EventId::new(),
                    scorecard_id: self.id,
                    player_index: player,
                    category,
                    previous,
                    value,
                    recorded_at: Timestamp::now(),
                })?;
                (next, Some(event))
            }
            ScorecardCommand::ClearScore { player, category } => {
                let previous = self.roster.score(player, category)?;
                let next = self.roster.clear_score(player, category)?;
                let event = envelope(&ScoreCleared {
                    event_id: EventId::new(),
                    scorecard_id: self.id,
                    player_index: player,
                    category,
                    previous,
                    cleared_at: Timestamp::now(),
                })?;
                (next, Some(event))
            }
            ScorecardCommand::ResetScores => {
                info!(scorecard_id = %self.id, players = self.roster.len(), "resetting all scores");
                let next = self.roster.reset_all_scores();
                let event = envelope(&ScoresReset {
                    event_id: EventId::new(),
                    scorecard_id: self.id,
                    player_count: self.roster.len(),
                    reset_at: Timestamp::now(),
                })?;
                (next, Some(event))
            }
        };

        self.commit(next, event, correlation_id)
    }

    fn add_player(
        &self,
        name: Option<String>,
    ) -> Result<(Roster, Option<EventEnvelope>), ScorecardError> {
        let index = self.roster.len();
        let name = name.unwrap_or_else(|| format!("{} {}", self.name_prefix, index + 1));
        let next = self.roster.add_player_named(name.clone());
        let event = envelope(&PlayerAdded {
            event_id: EventId::new(),
            scorecard_id: self.id,
            index,
            name,
            added_at: Timestamp::now(),
        })?;
        Ok((next, Some(event)))
    }

    fn remove_player(
        &self,
        index: usize,
    ) -> Result<(Roster, Option<EventEnvelope>), ScorecardError> {
        let next = self.roster.remove_player(index);
        let event = match self.roster.player(index) {
            Some(player) => Some(envelope(&PlayerRemoved {
                event_id: EventId::new(),
                scorecard_id: self.id,
                index,
                name: player.name().to_string(),
                final_total: ScoringEngine::compute_total(player),
                removed_at: Timestamp::now(),
            })?),
            None => None,
        };
        Ok((next, event))
    }

    fn player_name(&self, index: usize) -> String {
        self.roster
            .player(index)
            .map(|p| p.name().to_string())
            .unwrap_or_default()
    }

    /// Publishes the event (if any) and swaps in the next snapshot.
    ///
    /// Unchanged rosters are reported as no-ops and nothing is published.
    fn commit(
        &mut self,
        next: Roster,
        event: Option<EventEnvelope>,
        correlation_id: String,
    ) -> Result<CommandOutcome, ScorecardError> {
        let event = if next == self.roster {
            None
        } else {
            event.map(|e| e.with_correlation_id(correlation_id.clone()))
        };

        match &event {
            Some(envelope) => {
                self.event_publisher.publish(envelope.clone())?;
                debug!(
                    scorecard_id = %self.id,
                    event_type = %envelope.event_type,
                    "published event"
                );
            }
            None => warn!(scorecard_id = %self.id, "command left the roster unchanged"),
        }

        self.roster = next;
        Ok(CommandOutcome {
            roster: self.roster.clone(),
            event,
            correlation_id,
        })
    }
}

fn envelope<E>(event: &E) -> Result<EventEnvelope, ScorecardError>
where
    E: DomainEvent + serde::Serialize,
{
    EventEnvelope::from_event(event).map_err(|e| ScorecardError::Publish(e.to_string()))
}
