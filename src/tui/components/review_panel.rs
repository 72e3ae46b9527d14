//! Panel component for the generated review paragraph.
//!
//! Renders the most recent generation output with greedy word wrapping
//! so the paragraph fits the terminal width, followed by the aggregate
//! sentiment. Before the first generation the panel shows a hint
//! instead.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::review::GeneratedReview;

/// Narrowest width the paragraph is wrapped to. Terminals reporting
/// less than this still get readable output at the cost of overflow.
const MIN_WRAP_WIDTH: usize = 16;

/// Context for rendering the review panel.
#[derive(Debug, Clone)]
pub struct ReviewPanelViewContext<'a> {
    /// Most recent generation output, if any.
    pub review: Option<&'a GeneratedReview>,
    /// Maximum display width for wrapped lines.
    pub max_width: usize,
}

/// Component for displaying the generated review.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewPanelComponent;

impl ReviewPanelComponent {
    /// Creates a new review panel component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the review panel as a string.
    #[must_use]
    pub fn view(&self, ctx: &ReviewPanelViewContext<'_>) -> String {
        let Some(review) = ctx.review else {
            return "  No review generated yet. Press 'g' to generate.\n".to_owned();
        };

        let width = ctx.max_width.max(MIN_WRAP_WIDTH);
        let mut output = String::new();
        for line in wrap_to_display_width(review.text(), width) {
            output.push_str(&line);
            output.push('\n');
        }
        output.push('\n');
        output.push_str(&format!("Sentiment: {}\n", review.sentiment().label()));

        output
    }
}

/// Wraps text greedily at word boundaries to the given display width.
///
/// Words wider than the whole line are hard-split on character
/// boundaries so no output line exceeds `max_width` columns.
fn wrap_to_display_width(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if word_width > max_width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            (current, current_width) = hard_split_word(word, max_width, &mut lines);
            continue;
        }

        let separator = usize::from(!current.is_empty());
        if current_width + separator + word_width > max_width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
            current.push_str(word);
            current_width += word_width;
        } else {
            if separator == 1 {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Splits an overlong word into full lines, returning the trailing
/// partial chunk and its width for the caller to continue filling.
fn hard_split_word(word: &str, max_width: usize, lines: &mut Vec<String>) -> (String, usize) {
    let mut chunk = String::new();
    let mut chunk_width = 0usize;

    for ch in word.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if chunk_width + ch_width > max_width && !chunk.is_empty() {
            lines.push(std::mem::take(&mut chunk));
            chunk_width = 0;
        }
        chunk.push(ch);
        chunk_width += ch_width;
    }

    (chunk, chunk_width)
}
