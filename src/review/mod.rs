//! Review domain: the segment session, the generator, and their errors.
//!
//! A review is assembled from segments. Each segment names a category
//! and an item from the static catalogs, carries an ordered set of
//! characteristic labels, and optionally a star rating. The generator
//! turns the whole session into a templated paragraph with an
//! aggregate sentiment.

pub mod compose;
pub mod error;
pub mod session;

#[cfg(feature = "test-support")]
pub mod test_support;

pub use compose::{GeneratedReview, Sentiment, generate};
pub use error::ReviewError;
pub use session::{Rating, ReviewSession, Segment};
