// src/lib.rs
// Bookshelf - self-validating catalog entities
//
// Architecture:
// - Domain-centric: every rule lives in the entity that owns it
// - Fail-fast: constructors and mutations return DomainResult, never a
//   half-valid value
// - Synchronous and in-process: no I/O, no internal locking

pub mod domain;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

// Author
pub use domain::{validate_author, Author};

// Reviewer
pub use domain::{validate_reviewer, Reviewer, DEFAULT_ORGANIZATION};

// Review
pub use domain::{validate_review, Rating, Review};

// Book
pub use domain::{validate_book, Book, Genre};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use domain::{DomainResult, ValidationError, Violation};
