//! Builds the rendered score sheet from a roster snapshot.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{CategoryId, CategoryKind, Row};
use crate::domain::foundation::ScorecardError;
use crate::domain::roster::{MoveDirection, Roster};
use crate::domain::scoring::{OptionGenerator, ScoreCell, ScoringEngine, Standing};

/// How a leading total is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaderMarker {
    /// Sole highest total.
    Winner,
    /// Highest total shared with at least one other player.
    Tie,
}

/// Header of one player column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerColumn {
    pub index: usize,
    pub name: String,
    pub can_move_left: bool,
    pub can_move_right: bool,
}

/// One category row with its legal options and every player's cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRow {
    pub category: CategoryId,
    pub label: String,
    pub kind: CategoryKind,
    pub options: Vec<ScoreCell>,
    pub cells: Vec<ScoreCell>,
}

/// One player's entry in the total row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalCell {
    pub total: u32,
    pub marker: Option<LeaderMarker>,
}

/// Everything a view needs to draw the table for one roster snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSheet {
    pub columns: Vec<PlayerColumn>,
    pub rows: Vec<CategoryRow>,
    pub totals: Vec<TotalCell>,
    pub standing: Standing,
}

impl ScoreSheet {
    /// Projects a roster onto the generator's catalog.
    ///
    /// # Errors
    ///
    /// - `CatalogMismatch` if the roster was sized for a different catalog
    pub fn build(generator: &OptionGenerator, roster: &Roster) -> Result<Self, ScorecardError> {
        let catalog = generator.catalog();
        if roster.category_count() != catalog.len() {
            return Err(ScorecardError::catalog_mismatch(
                catalog.len(),
                roster.category_count(),
            ));
        }

        let columns = roster
            .players()
            .iter()
            .enumerate()
            .map(|(index, player)| PlayerColumn {
                index,
                name: player.name().to_string(),
                can_move_left: roster.neighbour(index, MoveDirection::Left).is_some(),
                can_move_right: roster.neighbour(index, MoveDirection::Right).is_some(),
            })
            .collect();

        let rows = catalog
            .iter()
            .map(|category| {
                let id = category.id();
                let cells = (0..roster.len())
                    .map(|p| roster.score(p, id))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(CategoryRow {
                    category: id,
                    label: category.label().to_string(),
                    kind: category.kind(),
                    options: generator.options_for_row(Row::Category(id))?,
                    cells,
                })
            })
            .collect::<Result<Vec<_>, ScorecardError>>()?;

        let standing = ScoringEngine::standing(roster);
        let marker = if standing.is_tie() {
            LeaderMarker::Tie
        } else {
            LeaderMarker::Winner
        };
        let totals = ScoringEngine::compute_totals(roster)
            .into_iter()
            .enumerate()
            .map(|(index, total)| TotalCell {
                total,
                marker: standing.is_leader(index).then_some(marker),
            })
            .collect();

        Ok(Self {
            columns,
            rows,
            totals,
            standing,
        })
    }

    /// Row labels followed by the total row label.
    pub fn row_labels(&self) -> Vec<&str> {
        self.rows
            .iter()
            .map(|row| row.label.as_str())
            .chain(std::iter::once(Row::TOTAL_LABEL))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> &'static OptionGenerator {
        OptionGenerator::standard()
    }

    #[test]
    fn sheet_has_row_per_category_and_column_per_player() {
        let roster = Roster::standard(["Pame", "Tomi", "Gene"]);
        let sheet = ScoreSheet::build(generator(), &roster).unwrap();

        assert_eq!(sheet.columns.len(), 3);
        assert_eq!(sheet.rows.len(), 11);
        assert_eq!(sheet.totals.len(), 3);
        assert!(sheet.rows.iter().all(|row| row.cells.len() == 3));
        assert_eq!(sheet.row_labels().last(), Some(&"Total"));
    }

    #[test]
    fn move_flags_disable_edges() {
        let roster = Roster::standard(["Pame", "Tomi"]);
        let sheet = ScoreSheet::build(generator(), &roster).unwrap();

        assert!(!sheet.columns[0].can_move_left);
        assert!(sheet.columns[0].can_move_right);
        assert!(sheet.columns[1].can_move_left);
        assert!(!sheet.columns[1].can_move_right);
    }

    #[test]
    fn rows_carry_options_and_cells() {
        let roster = Roster::standard(["Pame"])
            .set_score(0, CategoryId::new(3), ScoreCell::Numeric(16))
            .unwrap();
        let sheet = ScoreSheet::build(generator(), &roster).unwrap();

        let fours = &sheet.rows[3];
        assert_eq!(fours.label, "4");
        assert_eq!(fours.cells, vec![ScoreCell::Numeric(16)]);
        assert_eq!(fours.options.last(), Some(&ScoreCell::Forfeited));
    }

    #[test]
    fn sole_leader_marked_winner() {
        let roster = Roster::standard(["Pame", "Tomi"])
            .set_score(1, CategoryId::new(9), ScoreCell::Numeric(60))
            .unwrap();
        let sheet = ScoreSheet::build(generator(), &roster).unwrap();

        assert_eq!(sheet.totals[0], TotalCell { total: 0, marker: None });
        assert_eq!(
            sheet.totals[1],
            TotalCell {
                total: 60,
                marker: Some(LeaderMarker::Winner)
            }
        );
    }

    #[test]
    fn shared_lead_marked_tie() {
        let roster = Roster::standard(["Pame", "Tomi", "Gene"])
            .set_score(0, CategoryId::new(6), ScoreCell::Numeric(25))
            .and_then(|r| r.set_score(2, CategoryId::new(6), ScoreCell::Numeric(25)))
            .unwrap();
        let sheet = ScoreSheet::build(generator(), &roster).unwrap();

        assert_eq!(sheet.totals[0].marker, Some(LeaderMarker::Tie));
        assert_eq!(sheet.totals[1].marker, None);
        assert_eq!(sheet.totals[2].marker, Some(LeaderMarker::Tie));
        assert_eq!(sheet.standing, Standing::Tie(vec![0, 2]));
    }

    #[test]
    fn mismatched_roster_is_rejected() {
        let roster = Roster::with_players(["Pame"], 5);
        assert_eq!(
            ScoreSheet::build(generator(), &roster).unwrap_err(),
            ScorecardError::CatalogMismatch {
                expected: 11,
                actual: 5
            }
        );
    }

    #[test]
    fn empty_roster_builds_empty_sheet() {
        let sheet = ScoreSheet::build(generator(), &Roster::empty(11)).unwrap();
        assert!(sheet.columns.is_empty());
        assert!(sheet.totals.is_empty());
        assert_eq!(sheet.standing, Standing::NoPlayers);
    }
}
