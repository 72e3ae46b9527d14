//! Message routing and dispatch logic.
//!
//! This module routes messages based on whether an overlay is capturing
//! input and dispatches them to the category handlers. While an overlay
//! is open it intercepts navigation and selection messages, blocks other
//! user actions, and lets async results and window events through.

use bubbletea_rs::Cmd;

use super::ComposerApp;
use crate::tui::messages::AppMsg;

/// Result of routing while an overlay is open.
enum OverlayRouting {
    Handled(Option<Cmd>),
    Fallthrough,
}

impl ComposerApp {
    /// Routes messages while an overlay is capturing input.
    ///
    /// Returns `OverlayRouting::Handled` if the message was consumed by
    /// the overlay, or `OverlayRouting::Fallthrough` if the message
    /// should proceed to category-based dispatch.
    fn try_handle_in_overlay(&mut self, msg: &AppMsg) -> OverlayRouting {
        if !self.composer_state.overlay_open() {
            return OverlayRouting::Fallthrough;
        }

        match msg {
            AppMsg::CursorUp => {
                self.composer_state.overlay_cursor_up();
                OverlayRouting::Handled(None)
            }
            AppMsg::CursorDown => {
                let max_index = self.overlay_option_count().saturating_sub(1);
                self.composer_state.overlay_cursor_down(max_index);
                OverlayRouting::Handled(None)
            }
            AppMsg::ConfirmSelection => OverlayRouting::Handled(self.handle_overlay_confirm()),
            AppMsg::ToggleSelected => OverlayRouting::Handled(self.handle_overlay_toggle()),
            AppMsg::EscapePressed => {
                self.composer_state.close_overlay();
                OverlayRouting::Handled(None)
            }
            // Async results and window events stay live while an overlay
            // is open.
            AppMsg::Quit
            | AppMsg::ToggleHelp
            | AppMsg::WindowResized { .. }
            | AppMsg::CopyComplete { .. }
            | AppMsg::CopyFailed(_)
            | AppMsg::CopyFeedbackExpired(_) => OverlayRouting::Fallthrough,
            // Other user actions are blocked until the overlay closes.
            _ => OverlayRouting::Handled(None),
        }
    }

    /// Dispatches messages based on their category.
    fn dispatch_by_message_category(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_navigation() {
            return self.handle_navigation_msg(msg);
        }
        if msg.is_editing() {
            return self.handle_editing_msg(msg);
        }
        if msg.is_output() {
            return self.handle_output_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This method is the core update function that processes all
    /// application messages and returns any resulting commands. It first
    /// attempts overlay routing, then falls back to category-based
    /// dispatch.
    #[doc(hidden)]
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if let OverlayRouting::Handled(result) = self.try_handle_in_overlay(msg) {
            return result;
        }
        self.dispatch_by_message_category(msg)
    }

    /// Dispatches navigation messages to their handlers.
    fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::CursorUp => self.handle_cursor_up(),
            AppMsg::CursorDown => self.handle_cursor_down(),
            _ => {
                // Unreachable: caller filters to navigation messages.
                None
            }
        }
    }

    /// Dispatches segment editing messages to their handlers.
    fn handle_editing_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::AddSegment => self.handle_add_segment(),
            AppMsg::OpenCategoryPicker => self.handle_open_category_picker(),
            AppMsg::OpenItemPicker => self.handle_open_item_picker(),
            AppMsg::OpenCharacteristicToggles => self.handle_open_characteristic_toggles(),
            // Enter and Space only act inside an overlay.
            AppMsg::ConfirmSelection | AppMsg::ToggleSelected => None,
            AppMsg::SetRating(value) => self.handle_set_rating(*value),
            AppMsg::EscapePressed => self.handle_escape(),
            _ => {
                // Unreachable: caller filters to editing messages.
                None
            }
        }
    }

    /// Dispatches generation and clipboard messages to their handlers.
    fn handle_output_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::GenerateRequested => self.handle_generate_requested(),
            AppMsg::CopyRequested => self.handle_copy_requested(),
            AppMsg::CopyComplete { characters } => self.handle_copy_complete(*characters),
            AppMsg::CopyFailed(reason) => self.handle_copy_failed(reason),
            AppMsg::CopyFeedbackExpired(epoch) => self.handle_copy_feedback_expired(*epoch),
            _ => {
                // Unreachable: caller filters to output messages.
                None
            }
        }
    }

    /// Dispatches lifecycle and window messages to their handlers.
    fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, height } => self.handle_resize(*width, *height),
            _ => {
                // Unreachable: caller filters to lifecycle messages.
                None
            }
        }
    }
}
