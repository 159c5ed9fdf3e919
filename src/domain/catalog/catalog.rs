//! The ordered category catalog.

use once_cell::sync::Lazy;

use crate::domain::foundation::ScorecardError;

use super::{Category, CategoryId, FaceValue, Row, SpecialRule};

static STANDARD: Lazy<CategoryCatalog> = Lazy::new(CategoryCatalog::build_standard);

/// Fixed, ordered list of scoring categories.
///
/// # Invariants
///
/// - `categories[i].id().index() == i`
/// - never mutated after construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCatalog {
    categories: Vec<Category>,
}

impl CategoryCatalog {
    /// The Generala catalog: faces 1-6 followed by the five special combinations.
    pub fn standard() -> &'static CategoryCatalog {
        &STANDARD
    }

    fn build_standard() -> Self {
        let numerals = FaceValue::all()
            .enumerate()
            .map(|(i, face)| Category::numeral(CategoryId::new(i), face));
        let offset = FaceValue::all().count();
        let specials = SpecialRule::all()
            .iter()
            .enumerate()
            .map(|(i, rule)| Category::special(CategoryId::new(offset + i), *rule));

        Self {
            categories: numerals.chain(specials).collect(),
        }
    }

    /// Number of real categories (the total row is not counted).
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Looks up a category by id.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if `id` is not in `[0, len)`
    pub fn get(&self, id: CategoryId) -> Result<&Category, ScorecardError> {
        self.categories
            .get(id.index())
            .ok_or_else(|| ScorecardError::category_out_of_range(id.index(), self.len()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Returns the id of the category scoring `rule`, if the catalog has one.
    pub fn find_special(&self, rule: SpecialRule) -> Option<CategoryId> {
        self.categories
            .iter()
            .find(|c| c.kind() == super::CategoryKind::Special(rule))
            .map(Category::id)
    }

    /// All rendered rows: each category in order, then the total row.
    pub fn rows(&self) -> Vec<Row> {
        self.categories
            .iter()
            .map(|c| Row::Category(c.id()))
            .chain(std::iter::once(Row::Total))
            .collect()
    }

    /// Maps a rendered row index back to a row.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if `index` is past the total row
    pub fn row_at(&self, index: usize) -> Result<Row, ScorecardError> {
        match index.cmp(&self.len()) {
            std::cmp::Ordering::Less => Ok(Row::Category(CategoryId::new(index))),
            std::cmp::Ordering::Equal => Ok(Row::Total),
            std::cmp::Ordering::Greater => {
                Err(ScorecardError::row_out_of_range(index, self.len() + 1))
            }
        }
    }

    /// Label of a rendered row.
    pub fn row_label(&self, row: Row) -> Result<&str, ScorecardError> {
        match row {
            Row::Category(id) => self.get(id).map(Category::label),
            Row::Total => Ok(Row::TOTAL_LABEL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::CategoryKind;
    use crate::domain::foundation::IndexTarget;

    #[test]
    fn standard_catalog_has_eleven_categories() {
        assert_eq!(CategoryCatalog::standard().len(), 11);
    }

    #[test]
    fn ids_match_positions() {
        for (i, category) in CategoryCatalog::standard().iter().enumerate() {
            assert_eq!(category.id().index(), i);
        }
    }

    #[test]
    fn first_six_are_numerals_in_order() {
        let catalog = CategoryCatalog::standard();
        for i in 0..6 {
            let category = catalog.get(CategoryId::new(i)).unwrap();
            match category.kind() {
                CategoryKind::Numeral(face) => assert_eq!(usize::from(face.value()), i + 1),
                other => panic!("Expected numeral at {}, got {:?}", i, other),
            }
        }
    }

    #[test]
    fn specials_follow_numerals() {
        let catalog = CategoryCatalog::standard();
        let labels: Vec<&str> = catalog.iter().skip(6).map(Category::label).collect();
        assert_eq!(
            labels,
            vec![
                "Straight",
                "Full House",
                "Four of a Kind",
                "Generala",
                "Double Generala"
            ]
        );
    }

    #[test]
    fn get_out_of_range_fails() {
        let err = CategoryCatalog::standard()
            .get(CategoryId::new(11))
            .unwrap_err();
        assert_eq!(
            err,
            ScorecardError::OutOfRange {
                target: IndexTarget::Category,
                index: 11,
                len: 11
            }
        );
    }

    #[test]
    fn rows_end_with_total() {
        let rows = CategoryCatalog::standard().rows();
        assert_eq!(rows.len(), 12);
        assert_eq!(rows[0], Row::Category(CategoryId::new(0)));
        assert_eq!(rows[11], Row::Total);
    }

    #[test]
    fn row_at_maps_indices() {
        let catalog = CategoryCatalog::standard();
        assert_eq!(catalog.row_at(10).unwrap(), Row::Category(CategoryId::new(10)));
        assert_eq!(catalog.row_at(11).unwrap(), Row::Total);
        assert!(catalog.row_at(12).is_err());
    }

    #[test]
    fn row_label_for_total() {
        let catalog = CategoryCatalog::standard();
        assert_eq!(catalog.row_label(Row::Total).unwrap(), "Total");
        assert_eq!(catalog.row_label(Row::Category(CategoryId::new(0))).unwrap(), "1");
    }

    #[test]
    fn find_special_locates_generala() {
        let catalog = CategoryCatalog::standard();
        assert_eq!(
            catalog.find_special(SpecialRule::Generala),
            Some(CategoryId::new(9))
        );
    }
}
