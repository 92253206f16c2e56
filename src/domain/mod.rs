// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file declares all domain modules and re-exports their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod author;
pub mod book;
pub mod review;
pub mod reviewer;
pub mod text;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Author Domain
pub use author::{validate_author, Author};

// Reviewer Domain
pub use reviewer::{validate_reviewer, Reviewer, DEFAULT_ORGANIZATION};

// Review Domain
pub use review::{validate_review, Rating, Review};

// Book Domain
pub use book::{validate_book, Book, Genre};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use serde::Serialize;
use thiserror::Error;

/// Which family of rule a [`ValidationError`] comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Violation {
    /// Blank string or absent reference
    Required,
    /// String does not have the expected shape (URL, email)
    Format,
    /// Number outside its allowed range
    Range,
    /// Review points at a different book
    Referential,
    /// Reviewer already reviewed this book
    Uniqueness,
}

/// The single error raised by every constructor and mutation in the domain.
///
/// `field` is the logical name of the offending input so callers can branch
/// on it without parsing the message.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub kind: Violation,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, kind: Violation, message: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            message: message.into(),
        }
    }

    pub fn required(field: &'static str, message: impl Into<String>) -> Self {
        Self::new(field, Violation::Required, message)
    }

    pub fn format(field: &'static str, message: impl Into<String>) -> Self {
        Self::new(field, Violation::Format, message)
    }

    pub fn range(field: &'static str, message: impl Into<String>) -> Self {
        Self::new(field, Violation::Range, message)
    }

    pub fn referential(field: &'static str, message: impl Into<String>) -> Self {
        Self::new(field, Violation::Referential, message)
    }

    pub fn uniqueness(field: &'static str, message: impl Into<String>) -> Self {
        Self::new(field, Violation::Uniqueness, message)
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::Required => write!(f, "required"),
            Violation::Format => write!(f, "format"),
            Violation::Range => write!(f, "range"),
            Violation::Referential => write!(f, "referential"),
            Violation::Uniqueness => write!(f, "uniqueness"),
        }
    }
}

/// Domain result type
pub type DomainResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_display() {
        let rendered: Vec<String> = [
            Violation::Required,
            Violation::Format,
            Violation::Range,
            Violation::Referential,
            Violation::Uniqueness,
        ]
        .iter()
        .map(ToString::to_string)
        .collect();
        assert_eq!(rendered, ["required", "format", "range", "referential", "uniqueness"]);
    }

    #[test]
    fn test_error_displays_message_only() {
        let err = ValidationError::range("publishYear", "Publish year must be positive.");
        assert_eq!(err.to_string(), "Publish year must be positive.");
        assert_eq!(format!("{} {}", err.kind, err.field), "range publishYear");
    }
}
