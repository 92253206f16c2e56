//! Critical Book Invariants:
//!
//! 1. ISBN, title, publish year and author never change after construction
//! 2. Genre is the only freely mutable field
//! 3. Reviews are append-only and kept in submission order
//! 4. Every attached review carries the book's ISBN
//! 5. No two attached reviews share a reviewer (first name, last name) pair
//! 6. Total reviews is always the current length of the review list
//!
//! A book has no internal locking. Callers sharing one across threads must
//! serialize `add_review` and `set_genre` themselves (one lock per book).

pub mod entity;
pub mod invariants;


pub use entity::{Book, Genre};
pub use invariants::validate_book;
