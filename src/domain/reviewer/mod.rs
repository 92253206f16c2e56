pub mod entity;
pub mod invariants;

pub use entity::{Reviewer, DEFAULT_ORGANIZATION};
pub use invariants::validate_reviewer;
