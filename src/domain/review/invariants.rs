use std::sync::Arc;

use super::entity::Review;
use crate::domain::reviewer::{validate_reviewer, Reviewer};
use crate::domain::text::ensure_trimmed;
use crate::domain::{DomainResult, ValidationError};

/// Validates all Review invariants
pub fn validate_review(review: &Review) -> DomainResult<()> {
    ensure_trimmed("isbn", "ISBN", review.isbn())?;
    ensure_trimmed("comment", "Comment", review.comment())?;
    validate_reviewer(review.reviewer())?;
    Ok(())
}

/// Reviewer reference cannot be absent
pub(crate) fn validate_reviewer_present(
    reviewer: Option<Arc<Reviewer>>,
) -> DomainResult<Arc<Reviewer>> {
    reviewer.ok_or_else(|| ValidationError::required("reviewer", "Reviewer is required."))
}

/// Critical Review Invariants:
///
/// 1. ISBN and comment are non-blank and stored trimmed
/// 2. A review always has a reviewer
/// 3. Rating is one of Buy, Recommend, Avoid
/// 4. The ISBN is NOT checked against any book until the review is attached
