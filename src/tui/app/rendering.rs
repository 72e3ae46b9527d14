//! Rendering logic for the composer TUI application.
//!
//! This module contains the view rendering methods that produce string
//! output for display in the terminal. These are pure query methods that
//! read state without modification.

use super::ComposerApp;
use crate::catalog;
use crate::review::Segment;
use crate::tui::components::PickerViewContext;
use crate::tui::state::OverlayKind;

/// Status bar key hints for the main composer view.
const STATUS_HINTS: &str =
    "a:add  j/k:move  c:category  i:item  x:characteristics  1-5:rate  g:generate  y:copy  ?:help  q:quit";

impl ComposerApp {
    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        let title = "Morsel - Restaurant Review Composer";
        let count = self.session.len();
        let plural = if count == 1 { "" } else { "s" };
        format!("{title}  ({count} segment{plural})\n")
    }

    /// Renders the status bar.
    ///
    /// Copy feedback outranks notices, which outrank the key hints.
    pub(super) fn render_status_bar(&self) -> String {
        if let Some(feedback) = self.copy_feedback.notice() {
            return format!("{feedback}\n");
        }

        if let Some(notice) = &self.notice {
            return format!("{notice}\n");
        }

        format!("{STATUS_HINTS}\n")
    }

    /// Renders the open overlay over a minimal frame.
    pub(super) fn render_overlay_view(&self) -> String {
        let mut output = String::new();
        output.push_str(&self.render_header());
        output.push('\n');
        output.push_str(&self.render_picker());
        output
    }

    fn render_picker(&self) -> String {
        match self.composer_state.overlay {
            OverlayKind::None => String::new(),
            OverlayKind::CategoryPicker => self.render_category_picker(),
            OverlayKind::ItemPicker => self.render_item_picker(),
            OverlayKind::CharacteristicToggles => self.render_characteristic_toggles(),
        }
    }

    fn render_category_picker(&self) -> String {
        let options: Vec<&str> = catalog::categories()
            .iter()
            .map(|entry| entry.name)
            .collect();
        let marked: Vec<String> = self
            .selected_segment()
            .and_then(Segment::category)
            .map(str::to_owned)
            .into_iter()
            .collect();

        let ctx = PickerViewContext {
            title: "Select a category",
            options: &options,
            cursor_position: self.composer_state.overlay_cursor,
            marked: &marked,
            checkboxes: false,
            footer: "j/k:move  Enter:select  Esc:cancel",
        };
        self.picker.view(&ctx)
    }

    fn render_item_picker(&self) -> String {
        let marked: Vec<String> = self
            .selected_segment()
            .and_then(Segment::item)
            .map(str::to_owned)
            .into_iter()
            .collect();

        let ctx = PickerViewContext {
            title: "Select an item",
            options: self.item_options(),
            cursor_position: self.composer_state.overlay_cursor,
            marked: &marked,
            checkboxes: false,
            footer: "j/k:move  Enter:select  Esc:cancel",
        };
        self.picker.view(&ctx)
    }

    fn render_characteristic_toggles(&self) -> String {
        let title = self
            .selected_segment()
            .and_then(Segment::item)
            .map_or_else(
                || "Toggle characteristics".to_owned(),
                |item| format!("Toggle characteristics for {item}"),
            );
        let marked: Vec<String> = self
            .selected_segment()
            .map(|segment| segment.characteristics().to_vec())
            .unwrap_or_default();

        let ctx = PickerViewContext {
            title: &title,
            options: self.characteristic_options(),
            cursor_position: self.composer_state.overlay_cursor,
            marked: &marked,
            checkboxes: true,
            footer: "j/k:move  Space:toggle  Enter:done  Esc:close",
        };
        self.picker.view(&ctx)
    }

    /// Renders the help overlay listing keyboard shortcuts.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Navigation:
  j, Down    Move cursor down
  k, Up      Move cursor up

Segments:
  a          Add a segment
  c          Choose a category
  i          Choose an item
  x          Toggle characteristics
  1-5        Rate the selected segment

Review:
  g          Generate the review
  y          Copy the review to the clipboard

Overlays:
  Enter      Apply the highlighted option
  Space      Toggle the highlighted characteristic
  Esc        Close without changing anything

Other:
  ?          Toggle this help
  q          Quit

Press any key to close this help.
";
        help_text.to_owned()
    }
}
