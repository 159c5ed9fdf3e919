//! FaceValue value object (one die face, 1-6).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// The value shown on one face of a six-sided die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct FaceValue(u8);

impl FaceValue {
    /// Lowest face.
    pub const MIN: u8 = 1;

    /// Highest face.
    pub const MAX: u8 = 6;

    /// Creates a FaceValue, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "face_value",
                i64::from(Self::MIN),
                i64::from(Self::MAX),
                i64::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns all six faces in ascending order.
    pub fn all() -> impl Iterator<Item = FaceValue> {
        (Self::MIN..=Self::MAX).map(FaceValue)
    }
}

impl TryFrom<u8> for FaceValue {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<FaceValue> for u8 {
    fn from(face: FaceValue) -> Self {
        face.0
    }
}

impl fmt::Display for FaceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_accepts_one_through_six() {
        for v in 1..=6 {
            assert_eq!(FaceValue::try_new(v).unwrap().value(), v);
        }
    }

    #[test]
    fn try_new_rejects_zero_and_seven() {
        assert!(FaceValue::try_new(0).is_err());
        match FaceValue::try_new(7) {
            Err(ValidationError::OutOfRange { field, min, max, actual }) => {
                assert_eq!(field, "face_value");
                assert_eq!(min, 1);
                assert_eq!(max, 6);
                assert_eq!(actual, 7);
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
    }

    #[test]
    fn all_yields_six_faces_in_order() {
        let faces: Vec<u8> = FaceValue::all().map(|f| f.value()).collect();
        assert_eq!(faces, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn deserialization_rejects_invalid_face() {
        assert!(serde_json::from_str::<FaceValue>("4").is_ok());
        assert!(serde_json::from_str::<FaceValue>("9").is_err());
    }
}
