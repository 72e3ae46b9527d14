//! Review generation from the segment session.
//!
//! Generation is a pure function over the session: every call
//! recomputes the paragraph from scratch. Each sufficiently described
//! segment contributes one templated sentence; the closing sentence
//! carries the aggregate sentiment over all segments, rated or not.
//! Templates are fixed at compile time and rendered through
//! `minijinja` with auto-escaping disabled, since the output is plain
//! text rather than markup.

use minijinja::{Environment, context};
use serde::Serialize;

use super::error::ReviewError;
use super::session::{Rating, ReviewSession, Segment};

const SENTENCE_TEMPLATE_NAME: &str = "sentence";
const CLOSING_TEMPLATE_NAME: &str = "closing";

/// Sentence rendered for each contributing segment. The star clause
/// only appears when the segment carries a rating.
const SENTENCE_TEMPLATE: &str = "The {{ item }} ({{ category }}) was {{ characteristics }}\
{% if rating %} and deserves {{ rating }} stars{% endif %}.";

/// Closing sentence appended after the contributing sentences. When
/// no segment contributes, the leading space is still emitted.
const CLOSING_TEMPLATE: &str = "{{ sentences }} Overall, it was an {{ sentiment }} experience!";

/// Aggregate sentiment over the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    /// Mean rating strictly above three stars.
    Excellent,
    /// Everything else.
    Average,
}

impl Sentiment {
    /// Lower-case label used in the closing sentence.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Average => "average",
        }
    }
}

/// A rendered review paragraph with its aggregate sentiment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedReview {
    text: String,
    sentiment: Sentiment,
    sentence_count: usize,
}

impl GeneratedReview {
    /// The rendered paragraph.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Aggregate sentiment over all segments.
    #[must_use]
    pub const fn sentiment(&self) -> Sentiment {
        self.sentiment
    }

    /// Number of segment sentences in the paragraph.
    #[must_use]
    pub const fn sentence_count(&self) -> usize {
        self.sentence_count
    }
}

/// Template context for one contributing segment.
#[derive(Debug, Clone, Serialize)]
struct SentenceContext {
    /// Item name, lower-cased for prose.
    item: String,
    /// Category name, lower-cased for prose.
    category: String,
    /// Characteristic labels joined for prose.
    characteristics: String,
    /// Star value when the segment is rated.
    rating: Option<u8>,
}

impl From<&Segment> for SentenceContext {
    fn from(segment: &Segment) -> Self {
        Self {
            item: segment.item().unwrap_or_default().to_lowercase(),
            category: segment.category().unwrap_or_default().to_lowercase(),
            characteristics: join_characteristics(segment.characteristics()),
            rating: segment.rating().map(Rating::value),
        }
    }
}

/// Generates the review paragraph for the current session.
///
/// Segments contribute a sentence when category, item, and
/// characteristics are all present; a rating is not required for a
/// sentence, only for the star clause. The sentiment counts every
/// segment, with unrated segments weighing in as zero stars.
///
/// # Errors
///
/// Returns [`ReviewError::NoRatingProvided`] when every segment is
/// unrated, which includes the empty session. Returns
/// [`ReviewError::Template`] when rendering fails; the fixed
/// templates do not fail in practice.
pub fn generate(session: &ReviewSession) -> Result<GeneratedReview, ReviewError> {
    if !session.has_any_rating() {
        return Err(ReviewError::NoRatingProvided);
    }

    let environment = template_environment()?;

    let sentences = session
        .segments()
        .iter()
        .filter(|segment| segment.contributes_sentence())
        .map(|segment| render_sentence(&environment, segment))
        .collect::<Result<Vec<_>, _>>()?;
    let sentence_count = sentences.len();

    let sentiment = aggregate_sentiment(session.segments());

    let closing = environment
        .get_template(CLOSING_TEMPLATE_NAME)
        .map_err(template_error)?;
    let text = closing
        .render(context! {
            sentences => sentences.join(" "),
            sentiment => sentiment.label(),
        })
        .map_err(template_error)?;

    Ok(GeneratedReview {
        text,
        sentiment,
        sentence_count,
    })
}

fn template_environment() -> Result<Environment<'static>, ReviewError> {
    let mut environment = Environment::new();

    // Plain-text output; HTML entity escaping would mangle the prose.
    environment.set_auto_escape_callback(|_| minijinja::AutoEscape::None);

    environment
        .add_template(SENTENCE_TEMPLATE_NAME, SENTENCE_TEMPLATE)
        .map_err(template_error)?;
    environment
        .add_template(CLOSING_TEMPLATE_NAME, CLOSING_TEMPLATE)
        .map_err(template_error)?;

    Ok(environment)
}

fn render_sentence(
    environment: &Environment<'_>,
    segment: &Segment,
) -> Result<String, ReviewError> {
    let template = environment
        .get_template(SENTENCE_TEMPLATE_NAME)
        .map_err(template_error)?;

    template
        .render(SentenceContext::from(segment))
        .map_err(template_error)
}

fn template_error(error: minijinja::Error) -> ReviewError {
    ReviewError::Template {
        message: error.to_string(),
    }
}

/// Joins lower-cased characteristic labels for prose: a single label
/// stands alone; several are comma-separated with `" and "` before
/// the last.
fn join_characteristics(labels: &[String]) -> String {
    match labels.split_last() {
        None => String::new(),
        Some((only, rest)) if rest.is_empty() => only.to_lowercase(),
        Some((last, rest)) => {
            let head = rest
                .iter()
                .map(|label| label.to_lowercase())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{head} and {}", last.to_lowercase())
        }
    }
}

/// Compares the mean rating against the three-star threshold without
/// materializing the mean: `total / count > 3` holds exactly when
/// `total > 3 * count` for a non-zero count. The zero-count case is
/// rejected before this runs by the rating validation.
fn aggregate_sentiment(segments: &[Segment]) -> Sentiment {
    let total: u64 = segments
        .iter()
        .map(|segment| u64::from(segment.rating().map_or(0, Rating::value)))
        .sum();
    let count = segments.len() as u64;

    if total > count.saturating_mul(3) {
        Sentiment::Excellent
    } else {
        Sentiment::Average
    }
}

#[cfg(test)]
#[path = "compose_tests.rs"]
mod tests;
