use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::invariants::validate_reviewer_present;
use crate::domain::reviewer::Reviewer;
use crate::domain::text::require_text;
use crate::domain::DomainResult;

/// A reviewer's verdict on one book, identified by ISBN.
///
/// A review is a free-standing value until a [`crate::domain::Book`] accepts
/// it; the ISBN is only checked against a book at that point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    /// ISBN of the book this review is for
    isbn: String,

    /// Who wrote the review (REQUIRED)
    reviewer: Arc<Reviewer>,

    /// Recommendation given
    rating: Rating,

    /// Free-form text
    comment: String,
}

/// Closed set of recommendations a reviewer can give
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    Buy,
    Recommend,
    Avoid,
}

impl Review {
    /// Create a new Review
    /// `reviewer` is required; `None` is rejected like a blank field
    pub fn new(
        isbn: &str,
        reviewer: Option<Arc<Reviewer>>,
        rating: Rating,
        comment: &str,
    ) -> DomainResult<Self> {
        let isbn = require_text("isbn", "ISBN", isbn)?;
        let reviewer = validate_reviewer_present(reviewer)?;
        let comment = require_text("comment", "Comment", comment)?;

        Ok(Self {
            isbn,
            reviewer,
            rating,
            comment,
        })
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn reviewer(&self) -> &Reviewer {
        &self.reviewer
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }
}

impl Rating {
    pub const ALL: [Rating; 3] = [Rating::Buy, Rating::Recommend, Rating::Avoid];
}

impl std::fmt::Display for Review {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.isbn, self.reviewer, self.rating, self.comment
        )
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rating::Buy => write!(f, "Buy"),
            Rating::Recommend => write!(f, "Recommend"),
            Rating::Avoid => write!(f, "Avoid"),
        }
    }
}
