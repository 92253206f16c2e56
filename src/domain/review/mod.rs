pub mod entity;
pub mod invariants;

pub use entity::{Rating, Review};
pub use invariants::validate_review;
