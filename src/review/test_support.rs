//! Test helpers for constructing [`ReviewSession`] fixtures.
//!
//! Sessions can only be populated through the public mutation
//! operations, so tests describe the segments they need declaratively
//! and build the session by replaying those operations.
//!
//! # Examples
//!
//! ```
//! use morsel::review::test_support::{SegmentSpec, session_from_specs};
//!
//! let session = session_from_specs(&[SegmentSpec {
//!     category: Some("Food"),
//!     item: Some("Appetizer"),
//!     characteristics: &["Flavorful"],
//!     rating: Some(5),
//! }])
//! .expect("fixture values are valid");
//!
//! assert_eq!(session.len(), 1);
//! ```

use super::error::ReviewError;
use super::session::ReviewSession;

/// Declarative description of one segment for building fixtures.
///
/// Unset fields are skipped when the session is built, so a default
/// spec yields an untouched empty segment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentSpec<'a> {
    /// Category to select, if any.
    pub category: Option<&'a str>,
    /// Item to select, if any.
    pub item: Option<&'a str>,
    /// Characteristic labels to toggle on, in order.
    pub characteristics: &'a [&'a str],
    /// Star rating to apply, if any.
    pub rating: Option<u8>,
}

/// Builds a session by applying each spec through the public mutation
/// operations, in segment order.
///
/// # Errors
///
/// Returns the first mutation error, such as
/// [`ReviewError::RatingOutOfRange`] for a rating outside 1-5.
///
/// # Examples
///
/// ```
/// use morsel::review::test_support::{SegmentSpec, session_from_specs};
///
/// let session = session_from_specs(&[
///     SegmentSpec {
///         category: Some("Service"),
///         item: Some("Waiter"),
///         characteristics: &["Attentive", "Friendly"],
///         rating: Some(2),
///     },
///     SegmentSpec::default(),
/// ])
/// .expect("fixture values are valid");
///
/// assert_eq!(session.len(), 2);
/// assert!(session.has_any_rating());
/// ```
pub fn session_from_specs(specs: &[SegmentSpec<'_>]) -> Result<ReviewSession, ReviewError> {
    let mut session = ReviewSession::new();

    for spec in specs {
        let index = session.add_segment();
        if let Some(category) = spec.category {
            session.set_category(index, category)?;
        }
        if let Some(item) = spec.item {
            session.set_item(index, item)?;
        }
        for label in spec.characteristics {
            session.toggle_characteristic(index, label)?;
        }
        if let Some(value) = spec.rating {
            session.set_rating(index, value)?;
        }
    }

    Ok(session)
}

/// Builds a session holding a single fully described, rated segment.
///
/// # Errors
///
/// Returns [`ReviewError::RatingOutOfRange`] when `rating` is outside
/// 1-5.
///
/// # Examples
///
/// ```
/// use morsel::review::test_support::rated_segment_session;
///
/// let session = rated_segment_session("Food", "Dessert", &["Sweet"], 4)
///     .expect("fixture values are valid");
///
/// let segment = session.segments().first().expect("one segment");
/// assert_eq!(segment.item(), Some("Dessert"));
/// ```
pub fn rated_segment_session(
    category: &str,
    item: &str,
    characteristics: &[&str],
    rating: u8,
) -> Result<ReviewSession, ReviewError> {
    session_from_specs(&[SegmentSpec {
        category: Some(category),
        item: Some(item),
        characteristics,
        rating: Some(rating),
    }])
}

/// Builds a session of `count` empty, untouched segments.
#[must_use]
pub fn empty_segments_session(count: usize) -> ReviewSession {
    let mut session = ReviewSession::new();
    for _ in 0..count {
        session.add_segment();
    }
    session
}
