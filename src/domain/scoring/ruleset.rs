//! Ruleset - the legal point values of each category.
//!
//! Numeral rows are derived (face times number of dice showing it). Special
//! rows are a hand-specified table; house variants disagree on it, so the
//! table is data that configuration may replace.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{FaceValue, SpecialRule};
use crate::domain::foundation::ValidationError;

/// Number of dice rolled each turn.
pub const DICE_PER_ROLL: u32 = 5;

/// Point values offered for each special combination.
///
/// # Invariants
///
/// - every list is non-empty and strictly ascending
/// - no list contains zero (declining is a forfeit, not a zero score)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Ruleset {
    pub straight: Vec<u32>,
    pub full_house: Vec<u32>,
    pub four_of_a_kind: Vec<u32>,
    pub generala: Vec<u32>,
    pub double_generala: Vec<u32>,
}

impl Ruleset {
    /// The table used unless configuration overrides it.
    ///
    /// Each combination scores a base value, or a bonus when it is made on
    /// the first roll.
    pub fn canonical() -> Self {
        Self {
            straight: vec![20, 25],
            full_house: vec![30, 35],
            four_of_a_kind: vec![40, 45],
            generala: vec![50, 60],
            double_generala: vec![100, 120],
        }
    }

    /// Legal point values for a special combination, ascending.
    pub fn special_values(&self, rule: SpecialRule) -> &[u32] {
        match rule {
            SpecialRule::Straight => &self.straight,
            SpecialRule::FullHouse => &self.full_house,
            SpecialRule::FourOfAKind => &self.four_of_a_kind,
            SpecialRule::Generala => &self.generala,
            SpecialRule::DoubleGenerala => &self.double_generala,
        }
    }

    /// Legal point values for a numeral row: one through five matching dice.
    pub fn numeral_values(&self, face: FaceValue) -> Vec<u32> {
        let face = u32::from(face.value());
        (1..=DICE_PER_ROLL).map(|count| face * count).collect()
    }

    /// Checks the table invariants.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if a combination has no values
    /// - `InvalidFormat` if a list contains zero or is not strictly ascending
    pub fn validate(&self) -> Result<(), ValidationError> {
        for rule in SpecialRule::all() {
            let field = field_name(*rule);
            let values = self.special_values(*rule);

            if values.is_empty() {
                return Err(ValidationError::empty_field(field));
            }
            if values.contains(&0) {
                return Err(ValidationError::invalid_format(
                    field,
                    "zero is not a score; declining is recorded as a forfeit",
                ));
            }
            if values.windows(2).any(|pair| pair[0] >= pair[1]) {
                return Err(ValidationError::invalid_format(
                    field,
                    "values must be strictly ascending",
                ));
            }
        }
        Ok(())
    }
}

impl Default for Ruleset {
    fn default() -> Self {
        Self::canonical()
    }
}

fn field_name(rule: SpecialRule) -> &'static str {
    match rule {
        SpecialRule::Straight => "straight",
        SpecialRule::FullHouse => "full_house",
        SpecialRule::FourOfAKind => "four_of_a_kind",
        SpecialRule::Generala => "generala",
        SpecialRule::DoubleGenerala => "double_generala",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_table_values() {
        let rules = Ruleset::canonical();
        assert_eq!(rules.special_values(SpecialRule::Straight), &[20, 25]);
        assert_eq!(rules.special_values(SpecialRule::FullHouse), &[30, 35]);
        assert_eq!(rules.special_values(SpecialRule::FourOfAKind), &[40, 45]);
        assert_eq!(rules.special_values(SpecialRule::Generala), &[50, 60]);
        assert_eq!(rules.special_values(SpecialRule::DoubleGenerala), &[100, 120]);
    }

    #[test]
    fn canonical_table_is_valid() {
        assert!(Ruleset::canonical().validate().is_ok());
    }

    #[test]
    fn numeral_values_are_face_multiples() {
        let rules = Ruleset::canonical();
        let four = FaceValue::try_new(4).unwrap();
        assert_eq!(rules.numeral_values(four), vec![4, 8, 12, 16, 20]);
    }

    #[test]
    fn validate_rejects_empty_list() {
        let rules = Ruleset {
            generala: vec![],
            ..Ruleset::canonical()
        };
        assert_eq!(
            rules.validate(),
            Err(ValidationError::empty_field("generala"))
        );
    }

    #[test]
    fn validate_rejects_zero() {
        let rules = Ruleset {
            double_generala: vec![0, 100],
            ..Ruleset::canonical()
        };
        assert!(matches!(
            rules.validate(),
            Err(ValidationError::InvalidFormat { field, .. }) if field == "double_generala"
        ));
    }

    #[test]
    fn validate_rejects_unsorted_and_duplicates() {
        let unsorted = Ruleset {
            straight: vec![25, 20],
            ..Ruleset::canonical()
        };
        assert!(unsorted.validate().is_err());

        let duplicated = Ruleset {
            full_house: vec![30, 30],
            ..Ruleset::canonical()
        };
        assert!(duplicated.validate().is_err());
    }

    #[test]
    fn deserializes_from_json_and_rejects_unknown_keys() {
        let json = r#"{
            "straight": [20, 25],
            "full_house": [30, 35],
            "four_of_a_kind": [40, 45],
            "generala": [50, 55],
            "double_generala": [100]
        }"#;
        let rules: Ruleset = serde_json::from_str(json).unwrap();
        assert_eq!(rules.special_values(SpecialRule::Generala), &[50, 55]);

        let unknown = r#"{"straight": [20], "yahtzee": [50]}"#;
        assert!(serde_json::from_str::<Ruleset>(unknown).is_err());
    }
}
