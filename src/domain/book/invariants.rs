use std::sync::Arc;

use super::entity::Book;
use crate::domain::author::{validate_author, Author};
use crate::domain::review::{validate_review, Review};
use crate::domain::text::ensure_trimmed;
use crate::domain::{DomainResult, ValidationError};

/// Validates all Book invariants, including every attached review
pub fn validate_book(book: &Book) -> DomainResult<()> {
    ensure_trimmed("isbn", "ISBN", book.isbn())?;
    ensure_trimmed("title", "Title", book.title())?;
    validate_publish_year(book.publish_year())?;
    validate_author(book.author())?;

    for (index, review) in book.reviews().iter().enumerate() {
        validate_review(review)?;
        validate_review_isbn(book, review)?;
        validate_unique_reviewer(&book.reviews()[..index], review)?;
    }
    Ok(())
}

/// Publish year must be strictly positive
pub fn validate_publish_year(publish_year: i32) -> DomainResult<()> {
    if publish_year <= 0 {
        return Err(ValidationError::range(
            "publishYear",
            "Publish year must be a positive, non-zero whole number.",
        ));
    }
    Ok(())
}

pub(crate) fn validate_author_present(author: Option<Arc<Author>>) -> DomainResult<Arc<Author>> {
    author.ok_or_else(|| ValidationError::required("author", "Author is required."))
}

/// Checks run by `Book::add_review` before appending, in order
pub(crate) fn validate_review_for(book: &Book, review: &Review) -> DomainResult<()> {
    validate_review_isbn(book, review)?;
    validate_unique_reviewer(book.reviews(), review)?;
    Ok(())
}

/// Exact, case-sensitive ISBN match
fn validate_review_isbn(book: &Book, review: &Review) -> DomainResult<()> {
    if review.isbn() != book.isbn() {
        return Err(ValidationError::referential(
            "review.isbn",
            format!(
                "Review ISBN {} does not match Book ISBN {}.",
                review.isbn(),
                book.isbn()
            ),
        ));
    }
    Ok(())
}

/// First submission wins; there is no replace path
fn validate_unique_reviewer(existing: &[Review], review: &Review) -> DomainResult<()> {
    let incoming = review.reviewer();
    if existing
        .iter()
        .any(|r| r.reviewer().same_person(incoming))
    {
        return Err(ValidationError::uniqueness(
            "review",
            format!(
                "Reviewer {} {} has already submitted a review.",
                incoming.first_name(),
                incoming.last_name()
            ),
        ));
    }
    Ok(())
}
