//! Segment list component for displaying the session's segments.
//!
//! This component renders a scrollable list of segments with cursor
//! highlighting, showing each segment's category, item, characteristics,
//! and star rating on one line.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::review::{Rating, Segment};

/// Default visible height for the segment list component.
const DEFAULT_VISIBLE_HEIGHT: usize = 12;

/// Context for rendering the segment list view.
///
/// Bundles the data needed to render the session's segments without
/// requiring per-frame allocations.
#[derive(Debug, Clone)]
pub struct SegmentListViewContext<'a> {
    /// Segments in session order.
    pub segments: &'a [Segment],
    /// Current cursor position (0-indexed).
    pub cursor_position: usize,
    /// Maximum visible height in lines (for layout calculations).
    pub visible_height: usize,
    /// Maximum display width in columns.
    pub max_width: usize,
}

/// Component for displaying the list of review segments.
#[derive(Debug, Clone)]
pub struct SegmentListComponent {
    /// Visible height in lines (for scrolling calculations).
    visible_height: usize,
}

impl Default for SegmentListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SegmentListComponent {
    /// Creates a new segment list component.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            visible_height: DEFAULT_VISIBLE_HEIGHT,
        }
    }

    /// Updates the visible height for scrolling calculations.
    pub const fn set_visible_height(&mut self, height: usize) {
        self.visible_height = height;
    }

    /// Returns the visible height.
    #[must_use]
    pub const fn visible_height(&self) -> usize {
        self.visible_height
    }

    /// Renders the segment list as a string.
    ///
    /// Only renders segments within the visible window for performance
    /// with long sessions; the window is placed so the cursor stays
    /// visible.
    #[must_use]
    pub fn view(&self, ctx: &SegmentListViewContext<'_>) -> String {
        if ctx.segments.is_empty() {
            return "  No segments yet. Press 'a' to add one.\n".to_owned();
        }

        let mut output = String::new();

        // Use the context's visible_height, falling back to the component's
        let visible_height = if ctx.visible_height > 0 {
            ctx.visible_height
        } else {
            self.visible_height
        };

        // Keep the cursor inside the visible window
        let start = ctx
            .cursor_position
            .saturating_sub(visible_height.saturating_sub(1));

        for (index, segment) in ctx
            .segments
            .iter()
            .enumerate()
            .skip(start)
            .take(visible_height)
        {
            let is_selected = index == ctx.cursor_position;
            let prefix = if is_selected { ">" } else { " " };
            let line = Self::format_segment_line(index, segment, prefix);
            output.push_str(&truncate_to_display_width(&line, ctx.max_width));
            output.push('\n');
        }

        output
    }

    /// Formats a single segment line for display.
    fn format_segment_line(index: usize, segment: &Segment, prefix: &str) -> String {
        let number = index.saturating_add(1);
        let category = segment.category().unwrap_or("(no category)");
        let item = segment.item().unwrap_or("(no item)");
        let characteristics = if segment.characteristics().is_empty() {
            "-".to_owned()
        } else {
            segment.characteristics().join(", ")
        };
        let stars = segment
            .rating()
            .map_or_else(|| "unrated".to_owned(), render_stars);

        format!("{prefix} {number}. {category} / {item} [{characteristics}] {stars}")
    }
}

/// Renders a rating as filled and hollow star glyphs.
fn render_stars(rating: Rating) -> String {
    let filled = usize::from(rating.value());
    let hollow = usize::from(Rating::MAX.saturating_sub(rating.value()));
    format!("{}{}", "★".repeat(filled), "☆".repeat(hollow))
}

/// Truncates text to the provided display width and appends an ellipsis.
///
/// This helper measures width in terminal columns, not Unicode scalar
/// count, so double-width glyphs are not split mid-cell. The returned
/// string never exceeds `max_width` columns.
fn truncate_to_display_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_owned();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let target_width = max_width.saturating_sub(3);
    let mut truncated = String::new();
    let mut current_width = 0;
    for ch in text.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + char_width > target_width {
            break;
        }
        truncated.push(ch);
        current_width += char_width;
    }
    format!("{truncated}...")
}
