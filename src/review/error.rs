//! Error types exposed by the review domain.

use thiserror::Error;

/// Errors surfaced while mutating a session or generating a review.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReviewError {
    /// Generation was requested while every segment is still unrated.
    #[error("please select at least one star rating for any segment")]
    NoRatingProvided,

    /// A mutation addressed a segment that does not exist.
    #[error("segment index {index} is out of bounds for {count} segments")]
    SegmentOutOfBounds {
        /// The index supplied by the caller.
        index: usize,
        /// Number of segments currently in the session.
        count: usize,
    },

    /// A rating outside the 1-5 star domain was supplied.
    #[error("rating must be between 1 and 5 stars, got {value}")]
    RatingOutOfRange {
        /// The rejected rating value.
        value: u8,
    },

    /// The review template failed to render.
    #[error("template rendering failed: {message}")]
    Template {
        /// Detail from the template engine.
        message: String,
    },
}
