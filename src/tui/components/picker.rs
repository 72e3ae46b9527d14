//! Overlay component for choosing catalog entries.
//!
//! This component renders a titled option list with a cursor, used by the
//! category picker, the item picker, and the characteristic toggle list.
//! Single-select pickers mark the applied option with `*`; toggle lists
//! render `[x]`/`[ ]` checkboxes instead.

/// Context for rendering a picker overlay.
#[derive(Debug, Clone)]
pub struct PickerViewContext<'a> {
    /// Title displayed above the options.
    pub title: &'a str,
    /// Options to display in order.
    pub options: &'a [&'a str],
    /// Current cursor position (0-indexed).
    pub cursor_position: usize,
    /// Options currently applied to the segment.
    pub marked: &'a [String],
    /// Whether options render with toggle checkboxes.
    pub checkboxes: bool,
    /// Key hints displayed below the options.
    pub footer: &'a str,
}

/// Component for displaying overlay option lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct PickerComponent;

impl PickerComponent {
    /// Creates a new picker component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the picker overlay as a string.
    #[must_use]
    pub fn view(&self, ctx: &PickerViewContext<'_>) -> String {
        let mut output = String::new();

        output.push_str(ctx.title);
        output.push_str("\n\n");

        if ctx.options.is_empty() {
            output.push_str("  (no options available)\n");
        }

        for (index, option) in ctx.options.iter().enumerate() {
            let cursor = if index == ctx.cursor_position { ">" } else { " " };
            let marker = Self::format_marker(ctx, option);
            output.push_str(&format!("{cursor} {marker} {option}\n"));
        }

        output.push('\n');
        output.push_str(ctx.footer);
        output.push('\n');

        output
    }

    /// Formats the applied-state marker for one option.
    fn format_marker(ctx: &PickerViewContext<'_>, option: &str) -> &'static str {
        let is_marked = ctx.marked.iter().any(|marked| marked == option);
        match (ctx.checkboxes, is_marked) {
            (true, true) => "[x]",
            (true, false) => "[ ]",
            (false, true) => "*",
            (false, false) => " ",
        }
    }
}
