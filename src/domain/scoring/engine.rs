//! Scoring engine - totals and leaders.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::roster::{Player, Roster};

use super::ScoreCell;

/// Who is ahead on the current sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "players", rename_all = "snake_case")]
pub enum Standing {
    /// Nobody is playing.
    NoPlayers,
    /// One player holds the highest total.
    Winner(usize),
    /// Two or more players share the highest total, ascending by index.
    Tie(Vec<usize>),
}

impl Standing {
    /// Returns true if `index` is among the leaders.
    pub fn is_leader(&self, index: usize) -> bool {
        match self {
            Standing::NoPlayers => false,
            Standing::Winner(winner) => *winner == index,
            Standing::Tie(players) => players.contains(&index),
        }
    }

    pub fn is_tie(&self) -> bool {
        matches!(self, Standing::Tie(_))
    }
}

/// Stateless calculator over players and rosters.
pub struct ScoringEngine;

impl ScoringEngine {
    /// Sum of the player's numeric cells; unset and forfeited count zero.
    ///
    /// Saturates at `u32::MAX` for cells written outside the option table.
    pub fn compute_total(player: &Player) -> u32 {
        player
            .scores()
            .iter()
            .map(ScoreCell::points)
            .fold(0, u32::saturating_add)
    }

    /// Totals of every player, in roster order.
    pub fn compute_totals(roster: &Roster) -> Vec<u32> {
        roster.players().iter().map(Self::compute_total).collect()
    }

    /// Indices of every player whose total equals the maximum.
    ///
    /// # Edge Cases
    /// - Empty roster: returns the empty set
    /// - Single player: returns that player, whatever the total
    pub fn compute_leaders(roster: &Roster) -> BTreeSet<usize> {
        let totals = Self::compute_totals(roster);
        let Some(max) = totals.iter().copied().max() else {
            return BTreeSet::new();
        };

        totals
            .iter()
            .enumerate()
            .filter(|(_, total)| **total == max)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Classifies the leaders as a sole winner or a tie.
    pub fn standing(roster: &Roster) -> Standing {
        let leaders: Vec<usize> = Self::compute_leaders(roster).into_iter().collect();
        match leaders.as_slice() {
            [] => Standing::NoPlayers,
            [winner] => Standing::Winner(*winner),
            _ => Standing::Tie(leaders),
        }
    }

    /// Number of cells holding a number or a forfeit.
    pub fn filled_count(player: &Player) -> usize {
        player.scores().iter().filter(|cell| cell.is_recorded()).count()
    }

    /// True once no cell of the player is unset.
    pub fn is_complete(player: &Player) -> bool {
        player.scores().iter().all(ScoreCell::is_recorded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::CategoryId;
    use ScoreCell::{Forfeited, Numeric, Unset};

    fn roster_with_totals(totals: &[u32]) -> Roster {
        let names: Vec<String> = (1..=totals.len()).map(|i| format!("P{}", i)).collect();
        let mut roster = Roster::standard(names);
        for (i, total) in totals.iter().enumerate() {
            if *total > 0 {
                roster = roster
                    .set_score(i, CategoryId::new(10), Numeric(*total))
                    .unwrap();
            }
        }
        roster
    }

    #[test]
    fn total_sums_only_numeric_cells() {
        let player = crate::domain::roster::Player::reconstitute(
            "Pame".to_string(),
            vec![Numeric(3), Forfeited, Unset, Numeric(50)],
        );
        assert_eq!(ScoringEngine::compute_total(&player), 53);
    }

    #[test]
    fn total_saturates_instead_of_overflowing() {
        let roster = Roster::standard(["A", "B"])
            .set_score(0, CategoryId::new(0), Numeric(u32::MAX))
            .unwrap()
            .set_score(0, CategoryId::new(1), Numeric(1))
            .unwrap()
            .set_score(1, CategoryId::new(0), Numeric(u32::MAX - 1))
            .unwrap();

        assert_eq!(ScoringEngine::compute_total(&roster.players()[0]), u32::MAX);
        assert_eq!(
            ScoringEngine::compute_leaders(&roster),
            BTreeSet::from([0])
        );
    }

    #[test]
    fn total_of_fresh_player_is_zero() {
        let roster = Roster::standard(["Pame"]);
        assert_eq!(ScoringEngine::compute_total(&roster.players()[0]), 0);
    }

    #[test]
    fn leaders_include_every_tied_player() {
        let roster = roster_with_totals(&[30, 45, 45, 10]);
        assert_eq!(
            ScoringEngine::compute_leaders(&roster),
            BTreeSet::from([1, 2])
        );
    }

    #[test]
    fn leaders_of_empty_roster_is_empty() {
        let roster = Roster::empty(11);
        assert!(ScoringEngine::compute_leaders(&roster).is_empty());
        assert_eq!(ScoringEngine::standing(&roster), Standing::NoPlayers);
    }

    #[test]
    fn single_unscored_player_leads() {
        let roster = Roster::standard(["Solo"]);
        assert_eq!(ScoringEngine::compute_leaders(&roster), BTreeSet::from([0]));
        assert_eq!(ScoringEngine::standing(&roster), Standing::Winner(0));
    }

    #[test]
    fn all_zero_totals_tie() {
        let roster = Roster::standard(["A", "B"]);
        assert_eq!(ScoringEngine::standing(&roster), Standing::Tie(vec![0, 1]));
    }

    #[test]
    fn standing_distinguishes_winner_from_tie() {
        let winner = roster_with_totals(&[30, 50, 10]);
        assert_eq!(ScoringEngine::standing(&winner), Standing::Winner(1));

        let tie = roster_with_totals(&[30, 45, 45, 10]);
        let standing = ScoringEngine::standing(&tie);
        assert!(standing.is_tie());
        assert!(standing.is_leader(1));
        assert!(standing.is_leader(2));
        assert!(!standing.is_leader(0));
    }

    #[test]
    fn totals_follow_roster_order() {
        let roster = roster_with_totals(&[30, 45, 10]);
        assert_eq!(ScoringEngine::compute_totals(&roster), vec![30, 45, 10]);
    }

    #[test]
    fn filled_count_and_completion() {
        let mut roster = Roster::standard(["Pame"]);
        assert_eq!(ScoringEngine::filled_count(&roster.players()[0]), 0);

        for i in 0..roster.category_count() {
            roster = roster.set_score(0, CategoryId::new(i), Forfeited).unwrap();
        }
        assert_eq!(ScoringEngine::filled_count(&roster.players()[0]), 11);
        assert!(ScoringEngine::is_complete(&roster.players()[0]));
    }

    #[test]
    fn standing_serializes_with_outcome_tag() {
        assert_eq!(
            serde_json::to_string(&Standing::Tie(vec![1, 2])).unwrap(),
            r#"{"outcome":"tie","players":[1,2]}"#
        );
    }
}
