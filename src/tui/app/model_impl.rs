//! `Model` trait implementation for the composer TUI application.
//!
//! This module contains the `bubbletea_rs::Model` trait implementation
//! for `ComposerApp`, handling initialisation, update dispatch, and view
//! rendering.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};
use unicode_width::UnicodeWidthChar;

use super::ComposerApp;
use crate::tui::components::{ReviewPanelViewContext, SegmentListViewContext};
use crate::tui::input::map_key_to_message;
use crate::tui::messages::AppMsg;

impl Model for ComposerApp {
    fn init() -> (Self, Option<Cmd>) {
        let model = Self::new();

        // Emit the stored dimensions as a startup message so the first
        // render cycle runs without waiting for user input.
        let (width, height) = crate::tui::get_initial_terminal_size();
        let cmd: Cmd = Box::pin(async move {
            Some(Box::new(AppMsg::WindowResized { width, height }) as Box<dyn Any + Send>)
        });

        (model, Some(cmd))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        // Try to downcast to our message type
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        // Handle key events from bubbletea-rs
        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            // Any key closes the help overlay, including keys that are
            // otherwise bound.
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            let app_msg = map_key_to_message(key_msg);
            if let Some(mapped) = app_msg {
                return self.handle_message(&mapped);
            }
        }

        // Handle window size messages
        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        // If help is shown, render overlay instead
        if self.show_help {
            return self.normalise_viewport(&self.render_help_overlay());
        }

        // A picker or toggle overlay replaces the main view
        if self.composer_state.overlay_open() {
            return self.normalise_viewport(&self.render_overlay_view());
        }

        let mut output = String::new();

        output.push_str(&self.render_header());
        output.push('\n');

        let terminal_width = (self.width as usize).max(1);
        let list_ctx = SegmentListViewContext {
            segments: self.session.segments(),
            cursor_position: self.composer_state.segment_cursor,
            visible_height: self.segment_list.visible_height(),
            max_width: terminal_width,
        };
        output.push_str(&self.segment_list.view(&list_ctx));
        output.push('\n');

        let panel_ctx = ReviewPanelViewContext {
            review: self.generated.as_ref(),
            max_width: terminal_width,
        };
        output.push_str(&self.review_panel.view(&panel_ctx));

        output.push_str(&self.render_status_bar());

        self.normalise_viewport(&output)
    }
}

impl ComposerApp {
    /// Normalises the rendered frame to terminal dimensions.
    ///
    /// The output stream from components can leave stale trailing cells
    /// behind when rows are shorter than previous frames, especially
    /// after resize. We clamp rows to one column less than terminal
    /// width to avoid autowrap behaviour, while still padding with
    /// spaces to clear stale trailing cells after resize.
    fn normalise_viewport(&self, output: &str) -> String {
        let width = self.width.max(1) as usize;
        let safe_width = width.saturating_sub(1).max(1);
        let height = self.height.max(1) as usize;

        let mut lines: Vec<String> = output
            .lines()
            .map(|line| pad_or_truncate_line(line, safe_width))
            .collect();
        lines.truncate(height);

        let missing = height.saturating_sub(lines.len());
        let blank = " ".repeat(safe_width);
        lines.extend(std::iter::repeat_with(|| blank.clone()).take(missing));

        let mut normalised = lines.join("\n");
        normalised.push('\n');
        normalised
    }
}

/// Pads or truncates one frame row to exactly `width` display columns.
fn pad_or_truncate_line(line: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let mut output = String::new();
    let mut visible_width = 0usize;

    for ch in line.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if char_width == 0 {
            output.push(ch);
            continue;
        }

        if visible_width.saturating_add(char_width) > width {
            break;
        }

        output.push(ch);
        visible_width = visible_width.saturating_add(char_width);
    }

    if visible_width < width {
        output.push_str(&" ".repeat(width - visible_width));
    }

    output
}

#[cfg(test)]
#[path = "help_overlay_input_tests.rs"]
mod tests;
