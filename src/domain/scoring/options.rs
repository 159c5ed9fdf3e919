//! Option generator - the selectable values of each category.

use once_cell::sync::Lazy;

use crate::domain::catalog::{CategoryCatalog, CategoryId, CategoryKind, Row};
use crate::domain::foundation::ScorecardError;

use super::{Ruleset, ScoreCell};

static STANDARD: Lazy<OptionGenerator> =
    Lazy::new(|| OptionGenerator::new(CategoryCatalog::standard().clone(), Ruleset::canonical()));

/// Maps a category to the ordered values a player may pick for it.
///
/// Output depends only on the category id and the fixed catalog/ruleset pair,
/// never on players or roster state. Every option list is non-empty and ends
/// with `ScoreCell::Forfeited`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionGenerator {
    catalog: CategoryCatalog,
    ruleset: Ruleset,
}

impl OptionGenerator {
    pub fn new(catalog: CategoryCatalog, ruleset: Ruleset) -> Self {
        Self { catalog, ruleset }
    }

    /// Generator over the standard catalog and canonical ruleset.
    pub fn standard() -> &'static OptionGenerator {
        &STANDARD
    }

    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    pub fn ruleset(&self) -> &Ruleset {
        &self.ruleset
    }

    /// Legal values for a category: ascending points, then the forfeit.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if the category is not in the catalog
    pub fn options_for(&self, id: CategoryId) -> Result<Vec<ScoreCell>, ScorecardError> {
        let category = self.catalog.get(id)?;
        let points = match category.kind() {
            CategoryKind::Numeral(face) => self.ruleset.numeral_values(face),
            CategoryKind::Special(rule) => self.ruleset.special_values(rule).to_vec(),
        };

        Ok(points
            .into_iter()
            .map(ScoreCell::Numeric)
            .chain(std::iter::once(ScoreCell::Forfeited))
            .collect())
    }

    /// Legal values for a rendered row.
    ///
    /// # Errors
    ///
    /// - `NotSelectable` for the total row
    /// - `OutOfRange` if the category is not in the catalog
    pub fn options_for_row(&self, row: Row) -> Result<Vec<ScoreCell>, ScorecardError> {
        match row {
            Row::Category(id) => self.options_for(id),
            Row::Total => Err(ScorecardError::not_selectable(Row::TOTAL_LABEL)),
        }
    }

    /// Returns true if `value` is one of the category's options.
    pub fn is_legal(&self, id: CategoryId, value: ScoreCell) -> Result<bool, ScorecardError> {
        Ok(self.options_for(id)?.contains(&value))
    }

    /// Fails unless `value` is one of the category's options.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if the category is not in the catalog
    /// - `IllegalValue` if the value is not offered for it
    pub fn validate(&self, id: CategoryId, value: ScoreCell) -> Result<(), ScorecardError> {
        if self.is_legal(id, value)? {
            Ok(())
        } else {
            Err(ScorecardError::illegal_value(id.index(), value.placeholder()))
        }
    }
}
