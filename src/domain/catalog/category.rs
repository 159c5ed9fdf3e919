//! Category descriptors: numeral faces and the named special combinations.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::FaceValue;

/// Stable 0-based index of a category in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(usize);

impl CategoryId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for CategoryId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The five named combinations scored below the numeral rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialRule {
    Straight,
    FullHouse,
    /// Four of a kind, "Poker" at the table.
    FourOfAKind,
    /// Five of a kind, the game's namesake.
    Generala,
    DoubleGenerala,
}

impl SpecialRule {
    /// Returns all special rules in catalog order.
    pub fn all() -> &'static [SpecialRule] {
        &[
            SpecialRule::Straight,
            SpecialRule::FullHouse,
            SpecialRule::FourOfAKind,
            SpecialRule::Generala,
            SpecialRule::DoubleGenerala,
        ]
    }

    /// Returns the English display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            SpecialRule::Straight => "Straight",
            SpecialRule::FullHouse => "Full House",
            SpecialRule::FourOfAKind => "Four of a Kind",
            SpecialRule::Generala => "Generala",
            SpecialRule::DoubleGenerala => "Double Generala",
        }
    }

    /// Returns the name used on Spanish-language score sheets.
    pub fn table_name(&self) -> &'static str {
        match self {
            SpecialRule::Straight => "Escalera",
            SpecialRule::FullHouse => "Full",
            SpecialRule::FourOfAKind => "Poker",
            SpecialRule::Generala => "Generala",
            SpecialRule::DoubleGenerala => "Doble Generala",
        }
    }
}

impl fmt::Display for SpecialRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// What a category scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CategoryKind {
    /// Sum of the dice showing one face.
    Numeral(FaceValue),
    /// A named combination with fixed point values.
    Special(SpecialRule),
}

impl CategoryKind {
    pub fn is_numeral(&self) -> bool {
        matches!(self, CategoryKind::Numeral(_))
    }
}

/// One entry of the fixed, ordered catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    kind: CategoryKind,
    label: String,
}

impl Category {
    pub fn numeral(id: CategoryId, face: FaceValue) -> Self {
        Self {
            id,
            kind: CategoryKind::Numeral(face),
            label: face.to_string(),
        }
    }

    pub fn special(id: CategoryId, rule: SpecialRule) -> Self {
        Self {
            id,
            kind: CategoryKind::Special(rule),
            label: rule.display_name().to_string(),
        }
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn kind(&self) -> CategoryKind {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A row of the rendered score sheet: a real category or the derived total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Row {
    Category(CategoryId),
    Total,
}

impl Row {
    /// Display label of the total row.
    pub const TOTAL_LABEL: &'static str = "Total";

    pub fn is_total(&self) -> bool {
        matches!(self, Row::Total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_rules_are_in_catalog_order() {
        assert_eq!(
            SpecialRule::all(),
            &[
                SpecialRule::Straight,
                SpecialRule::FullHouse,
                SpecialRule::FourOfAKind,
                SpecialRule::Generala,
                SpecialRule::DoubleGenerala,
            ]
        );
    }

    #[test]
    fn special_rule_names() {
        assert_eq!(SpecialRule::FourOfAKind.display_name(), "Four of a Kind");
        assert_eq!(SpecialRule::FourOfAKind.table_name(), "Poker");
        assert_eq!(SpecialRule::DoubleGenerala.table_name(), "Doble Generala");
    }

    #[test]
    fn special_rule_serializes_to_snake_case() {
        assert_eq!(
            serde_json::to_string(&SpecialRule::DoubleGenerala).unwrap(),
            "\"double_generala\""
        );
    }

    #[test]
    fn numeral_category_label_is_face() {
        let face = FaceValue::try_new(3).unwrap();
        let category = Category::numeral(CategoryId::new(2), face);
        assert_eq!(category.label(), "3");
        assert!(category.kind().is_numeral());
    }

    #[test]
    fn special_category_label_is_display_name() {
        let category = Category::special(CategoryId::new(7), SpecialRule::FullHouse);
        assert_eq!(category.label(), "Full House");
        assert_eq!(category.kind(), CategoryKind::Special(SpecialRule::FullHouse));
    }
}
