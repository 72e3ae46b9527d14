//! Segment session state and its mutation entry points.
//!
//! The session owns the ordered segment list. All mutation flows
//! through the five operations here, so the generator can treat the
//! session as plain data and the interface layer never touches the
//! fields directly.

use super::error::ReviewError;

/// A star rating bounded to the 1-5 domain.
///
/// Ratings are validated where they enter the session; an unset
/// rating is represented as `Option<Rating>` rather than a zero
/// sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    /// Smallest expressible star rating.
    pub const MIN: u8 = 1;
    /// Largest expressible star rating.
    pub const MAX: u8 = 5;

    /// Validates `value` into a rating.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::RatingOutOfRange`] when `value` is not
    /// between [`Rating::MIN`] and [`Rating::MAX`].
    pub const fn new(value: u8) -> Result<Self, ReviewError> {
        if matches!(value, Self::MIN..=Self::MAX) {
            Ok(Self(value))
        } else {
            Err(ReviewError::RatingOutOfRange { value })
        }
    }

    /// Returns the numeric star value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

/// One reviewed aspect of the experience.
///
/// Segments start empty and are filled in as the user picks a
/// category, an item, characteristics, and a rating. Fields are
/// mutated exclusively through [`ReviewSession`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segment {
    category: Option<String>,
    item: Option<String>,
    characteristics: Vec<String>,
    rating: Option<Rating>,
}

impl Segment {
    /// Selected category, if any.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Selected item, if any.
    #[must_use]
    pub fn item(&self) -> Option<&str> {
        self.item.as_deref()
    }

    /// Characteristic labels in selection order.
    #[must_use]
    pub fn characteristics(&self) -> &[String] {
        &self.characteristics
    }

    /// Star rating, if one has been given.
    #[must_use]
    pub const fn rating(&self) -> Option<Rating> {
        self.rating
    }

    /// True when `label` is currently part of the characteristic set.
    #[must_use]
    pub fn has_characteristic(&self, label: &str) -> bool {
        self.characteristics.iter().any(|c| c == label)
    }

    /// True when the segment yields a sentence: category, item, and
    /// characteristic set are all non-empty. A rating is not required.
    #[must_use]
    pub fn contributes_sentence(&self) -> bool {
        let has_category = self.category.as_deref().is_some_and(|c| !c.is_empty());
        let has_item = self.item.as_deref().is_some_and(|i| !i.is_empty());
        has_category && has_item && !self.characteristics.is_empty()
    }
}

/// Ordered segment list with the session's mutation entry points.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewSession {
    segments: Vec<Segment>,
}

impl ReviewSession {
    /// Creates an empty session.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Segments in insertion order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments in the session.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.segments.len()
    }

    /// True when no segment has been added yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// True when at least one segment carries a rating.
    #[must_use]
    pub fn has_any_rating(&self) -> bool {
        self.segments.iter().any(|segment| segment.rating.is_some())
    }

    /// Appends a new empty segment and returns its index.
    pub fn add_segment(&mut self) -> usize {
        self.segments.push(Segment::default());
        self.segments.len().saturating_sub(1)
    }

    /// Sets the category for the segment at `index` and clears the
    /// dependent item and characteristic selections. The rating is
    /// preserved; it does not depend on the catalogs.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::SegmentOutOfBounds`] when `index` does
    /// not name a segment.
    pub fn set_category(&mut self, index: usize, category: &str) -> Result<(), ReviewError> {
        let segment = self.segment_mut(index)?;
        segment.category = Some(category.to_owned());
        segment.item = None;
        segment.characteristics.clear();
        Ok(())
    }

    /// Sets the item for the segment at `index` and clears the
    /// characteristic selection, which belongs to the previous item.
    /// Accepts any string; catalog membership is the caller's concern.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::SegmentOutOfBounds`] when `index` does
    /// not name a segment.
    pub fn set_item(&mut self, index: usize, item: &str) -> Result<(), ReviewError> {
        let segment = self.segment_mut(index)?;
        segment.item = Some(item.to_owned());
        segment.characteristics.clear();
        Ok(())
    }

    /// Removes `characteristic` from the segment's set when present,
    /// otherwise appends it. Toggling the same label twice restores
    /// the original set.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::SegmentOutOfBounds`] when `index` does
    /// not name a segment.
    pub fn toggle_characteristic(
        &mut self,
        index: usize,
        characteristic: &str,
    ) -> Result<(), ReviewError> {
        let segment = self.segment_mut(index)?;
        let before = segment.characteristics.len();
        segment.characteristics.retain(|c| c != characteristic);
        if segment.characteristics.len() == before {
            segment.characteristics.push(characteristic.to_owned());
        }
        Ok(())
    }

    /// Sets the star rating for the segment at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::RatingOutOfRange`] when `value` is not
    /// between 1 and 5, or [`ReviewError::SegmentOutOfBounds`] when
    /// `index` does not name a segment.
    pub fn set_rating(&mut self, index: usize, value: u8) -> Result<(), ReviewError> {
        let rating = Rating::new(value)?;
        let segment = self.segment_mut(index)?;
        segment.rating = Some(rating);
        Ok(())
    }

    fn segment_mut(&mut self, index: usize) -> Result<&mut Segment, ReviewError> {
        let count = self.segments.len();
        self.segments
            .get_mut(index)
            .ok_or(ReviewError::SegmentOutOfBounds { index, count })
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
