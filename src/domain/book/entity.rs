use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::invariants::{validate_author_present, validate_publish_year, validate_review_for};
use crate::domain::author::Author;
use crate::domain::review::Review;
use crate::domain::text::require_text;
use crate::domain::DomainResult;

/// A book and the reviews it has accepted.
///
/// ISBN is the identity of the aggregate. Everything except `genre` and the
/// append-only review list is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Aggregate identity, compared exactly against review ISBNs
    isbn: String,

    /// Title as published
    title: String,

    /// Year of publication (strictly positive)
    publish_year: i32,

    /// Author, possibly shared with other books
    author: Arc<Author>,

    /// Category, the only freely mutable field
    genre: Genre,

    /// Accepted reviews in submission order
    reviews: Vec<Review>,
}

/// Closed set of book categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Fiction,
    NonFiction,
    Fantasy,
    Mystery,
    Biography,
    ScienceFiction,
    Romance,
}

impl Book {
    /// Create a new Book with no reviews
    /// `author` is required; `None` is rejected like a blank field
    pub fn new(
        isbn: &str,
        title: &str,
        publish_year: i32,
        author: Option<Arc<Author>>,
        genre: Genre,
    ) -> DomainResult<Self> {
        let isbn = require_text("isbn", "ISBN", isbn)?;
        let title = require_text("title", "Title", title)?;
        validate_publish_year(publish_year)?;
        let author = validate_author_present(author)?;

        Ok(Self {
            isbn,
            title,
            publish_year,
            author,
            genre,
            reviews: Vec::new(),
        })
    }

    /// Attach a review
    /// Rejects reviews for another ISBN and a second review from the same
    /// reviewer; on success the review goes to the end of the list
    pub fn add_review(&mut self, review: Review) -> DomainResult<()> {
        if let Err(err) = validate_review_for(self, &review) {
            log::warn!("Rejected review for book {} ({}): {}", self.isbn, err.kind, err);
            return Err(err);
        }

        log::debug!(
            "Review by {} {} added to book {}",
            review.reviewer().first_name(),
            review.reviewer().last_name(),
            self.isbn
        );
        self.reviews.push(review);
        Ok(())
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn publish_year(&self) -> i32 {
        self.publish_year
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn genre(&self) -> Genre {
        self.genre
    }

    /// Genre is the one field that can be changed freely
    pub fn set_genre(&mut self, genre: Genre) {
        if genre != self.genre {
            log::debug!("Book {} genre changed from {} to {}", self.isbn, self.genre, genre);
        }
        self.genre = genre;
    }

    /// Reviews in submission order
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn total_reviews(&self) -> usize {
        self.reviews.len()
    }
}

impl Genre {
    pub const ALL: [Genre; 7] = [
        Genre::Fiction,
        Genre::NonFiction,
        Genre::Fantasy,
        Genre::Mystery,
        Genre::Biography,
        Genre::ScienceFiction,
        Genre::Romance,
    ];
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{}",
            self.isbn,
            self.title,
            self.publish_year,
            self.author,
            self.genre,
            self.total_reviews()
        )
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Genre::Fiction => write!(f, "Fiction"),
            Genre::NonFiction => write!(f, "NonFiction"),
            Genre::Fantasy => write!(f, "Fantasy"),
            Genre::Mystery => write!(f, "Mystery"),
            Genre::Biography => write!(f, "Biography"),
            Genre::ScienceFiction => write!(f, "ScienceFiction"),
            Genre::Romance => write!(f, "Romance"),
        }
    }
}
