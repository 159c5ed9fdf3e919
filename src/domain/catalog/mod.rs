//! Category catalog - the fixed rows of the score sheet.
//!
//! Six numeral categories (faces 1-6) followed by five special combinations.
//! The catalog has no mutation operations; the total row is virtual and holds
//! no score.

#[allow(clippy::module_inception)]
mod catalog;
mod category;
mod face_value;

pub use catalog::CategoryCatalog;
pub use category::{Category, CategoryId, CategoryKind, Row, SpecialRule};
pub use face_value::FaceValue;
