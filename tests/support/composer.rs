//! Shared helpers for driving a `ComposerApp` through picker overlays.
//!
//! The composer TUI only mutates segments through overlay selections,
//! so behavioural tests steer the overlay cursor onto a named option
//! and confirm it, exactly as a user would.

use morsel::catalog;
use morsel::tui::ComposerApp;
use morsel::tui::messages::AppMsg;
use morsel::tui::state::OverlayKind;

/// Moves the open overlay's cursor onto `target`.
///
/// Rewinds to the top first because pickers open with the cursor on
/// the currently applied option.
fn steer_overlay_cursor(app: &mut ComposerApp, target: usize) {
    while app.overlay_cursor() > 0 {
        app.handle_message(&AppMsg::CursorUp);
    }
    for _ in 0..target {
        app.handle_message(&AppMsg::CursorDown);
    }
}

/// Reads the selected segment's category, if any.
fn selected_category(app: &ComposerApp) -> Result<String, String> {
    app.session()
        .segments()
        .get(app.cursor_position())
        .and_then(|segment| segment.category().map(str::to_owned))
        .ok_or_else(|| "selected segment has no category".to_owned())
}

/// Reads the selected segment's item, if any.
fn selected_item(app: &ComposerApp) -> Result<String, String> {
    app.session()
        .segments()
        .get(app.cursor_position())
        .and_then(|segment| segment.item().map(str::to_owned))
        .ok_or_else(|| "selected segment has no item".to_owned())
}

/// Opens the category picker and confirms `category` for the selected
/// segment.
///
/// # Errors
///
/// Returns an error if the picker refuses to open or the category is
/// not in the catalog.
pub fn pick_category(app: &mut ComposerApp, category: &str) -> Result<(), String> {
    let position = catalog::categories()
        .iter()
        .position(|entry| entry.name == category)
        .ok_or_else(|| format!("unknown category: {category}"))?;

    app.handle_message(&AppMsg::OpenCategoryPicker);
    if app.overlay() != OverlayKind::CategoryPicker {
        return Err(app
            .notice()
            .unwrap_or("category picker did not open")
            .to_owned());
    }

    steer_overlay_cursor(app, position);
    app.handle_message(&AppMsg::ConfirmSelection);
    Ok(())
}

/// Opens the item picker and confirms `item` for the selected segment.
///
/// # Errors
///
/// Returns an error if the picker refuses to open or the item does not
/// belong to the segment's category.
pub fn pick_item(app: &mut ComposerApp, item: &str) -> Result<(), String> {
    let category = selected_category(app)?;
    let items = catalog::items_for(&category)
        .ok_or_else(|| format!("no items for category: {category}"))?;
    let position = items
        .iter()
        .position(|candidate| *candidate == item)
        .ok_or_else(|| format!("unknown item for {category}: {item}"))?;

    app.handle_message(&AppMsg::OpenItemPicker);
    if app.overlay() != OverlayKind::ItemPicker {
        return Err(app
            .notice()
            .unwrap_or("item picker did not open")
            .to_owned());
    }

    steer_overlay_cursor(app, position);
    app.handle_message(&AppMsg::ConfirmSelection);
    Ok(())
}

/// Opens the characteristic toggle list, toggles `label`, and closes
/// the list again.
///
/// # Errors
///
/// Returns an error if the list refuses to open or the label does not
/// belong to the segment's item.
pub fn toggle_characteristic(app: &mut ComposerApp, label: &str) -> Result<(), String> {
    let item = selected_item(app)?;
    let labels = catalog::characteristics_for(&item)
        .ok_or_else(|| format!("no characteristics for item: {item}"))?;
    let position = labels
        .iter()
        .position(|candidate| *candidate == label)
        .ok_or_else(|| format!("unknown characteristic for {item}: {label}"))?;

    app.handle_message(&AppMsg::OpenCharacteristicToggles);
    if app.overlay() != OverlayKind::CharacteristicToggles {
        return Err(app
            .notice()
            .unwrap_or("characteristic toggles did not open")
            .to_owned());
    }

    steer_overlay_cursor(app, position);
    app.handle_message(&AppMsg::ToggleSelected);
    app.handle_message(&AppMsg::ConfirmSelection);
    Ok(())
}
