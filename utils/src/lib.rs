pub mod field_helpers;
pub mod serialization;

pub use field_helpers::{batch_invert, FieldHelpers};
