//! Handlers for the picker and toggle overlays.
//!
//! Opening an overlay seeds its cursor on the option already applied to
//! the selected segment, so confirming without moving is a no-op.
//! Characteristic toggles apply immediately on toggle; Enter only closes
//! the list. Category and item selection apply on confirm, which clears
//! the dependent fields through the session.

use bubbletea_rs::Cmd;

use super::{ADD_SEGMENT_HINT, ComposerApp};
use crate::catalog;
use crate::review::{ReviewError, Segment};
use crate::tui::state::OverlayKind;

/// Notice shown when the item picker needs a category first.
const PICK_CATEGORY_HINT: &str = "Pick a category first by pressing 'c'.";

/// Notice shown when the characteristic list needs an item first.
const PICK_ITEM_HINT: &str = "Pick an item first by pressing 'i'.";

impl ComposerApp {
    /// Opens the category picker for the selected segment.
    pub(super) fn handle_open_category_picker(&mut self) -> Option<Cmd> {
        if self.session.is_empty() {
            self.notice = Some(ADD_SEGMENT_HINT.to_owned());
            return None;
        }

        let cursor = self
            .selected_segment()
            .and_then(Segment::category)
            .and_then(|category| {
                catalog::categories()
                    .iter()
                    .position(|entry| entry.name == category)
            })
            .unwrap_or(0);
        self.composer_state
            .open_overlay(OverlayKind::CategoryPicker, cursor);
        self.notice = None;
        None
    }

    /// Opens the item picker for the selected segment.
    pub(super) fn handle_open_item_picker(&mut self) -> Option<Cmd> {
        if self.session.is_empty() {
            self.notice = Some(ADD_SEGMENT_HINT.to_owned());
            return None;
        }
        if self.item_options().is_empty() {
            self.notice = Some(PICK_CATEGORY_HINT.to_owned());
            return None;
        }

        let cursor = self
            .selected_segment()
            .and_then(Segment::item)
            .and_then(|item| {
                self.item_options()
                    .iter()
                    .position(|candidate| *candidate == item)
            })
            .unwrap_or(0);
        self.composer_state
            .open_overlay(OverlayKind::ItemPicker, cursor);
        self.notice = None;
        None
    }

    /// Opens the characteristic toggle list for the selected segment.
    pub(super) fn handle_open_characteristic_toggles(&mut self) -> Option<Cmd> {
        if self.session.is_empty() {
            self.notice = Some(ADD_SEGMENT_HINT.to_owned());
            return None;
        }
        if self.characteristic_options().is_empty() {
            self.notice = Some(PICK_ITEM_HINT.to_owned());
            return None;
        }

        self.composer_state
            .open_overlay(OverlayKind::CharacteristicToggles, 0);
        self.notice = None;
        None
    }

    /// Applies the highlighted overlay option and closes the overlay.
    pub(super) fn handle_overlay_confirm(&mut self) -> Option<Cmd> {
        let result = match self.composer_state.overlay {
            OverlayKind::None | OverlayKind::CharacteristicToggles => Ok(()),
            OverlayKind::CategoryPicker => self.apply_category_selection(),
            OverlayKind::ItemPicker => self.apply_item_selection(),
        };
        self.composer_state.close_overlay();

        if let Err(error) = result {
            self.notice = Some(error.to_string());
        }
        None
    }

    /// Toggles the highlighted characteristic without closing the list.
    pub(super) fn handle_overlay_toggle(&mut self) -> Option<Cmd> {
        if self.composer_state.overlay != OverlayKind::CharacteristicToggles {
            return None;
        }

        let Some(label) = self
            .characteristic_options()
            .get(self.composer_state.overlay_cursor)
            .copied()
        else {
            return None;
        };

        let index = self.composer_state.segment_cursor;
        if let Err(error) = self.session.toggle_characteristic(index, label) {
            self.notice = Some(error.to_string());
        }
        None
    }

    /// Returns the number of options in the open overlay.
    pub(super) fn overlay_option_count(&self) -> usize {
        match self.composer_state.overlay {
            OverlayKind::None => 0,
            OverlayKind::CategoryPicker => catalog::categories().len(),
            OverlayKind::ItemPicker => self.item_options().len(),
            OverlayKind::CharacteristicToggles => self.characteristic_options().len(),
        }
    }

    fn apply_category_selection(&mut self) -> Result<(), ReviewError> {
        let Some(category) = catalog::categories()
            .get(self.composer_state.overlay_cursor)
            .map(|entry| entry.name)
        else {
            return Ok(());
        };
        self.session
            .set_category(self.composer_state.segment_cursor, category)
    }

    fn apply_item_selection(&mut self) -> Result<(), ReviewError> {
        let Some(item) = self
            .item_options()
            .get(self.composer_state.overlay_cursor)
            .copied()
        else {
            return Ok(());
        };
        self.session
            .set_item(self.composer_state.segment_cursor, item)
    }
}

#[cfg(test)]
#[path = "overlay_handlers_tests.rs"]
mod tests;
