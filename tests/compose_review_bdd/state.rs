//! Scenario state for review composition BDD tests.

use morsel::review::Rating;
use morsel::tui::ComposerApp;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// State shared across steps in a composition scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct ComposeState {
    /// The TUI application model under test.
    pub(crate) app: Slot<ComposerApp>,
}

/// Reads the selected segment's category label.
pub(crate) fn selected_category(app: &ComposerApp) -> Option<String> {
    app.session()
        .segments()
        .get(app.cursor_position())
        .and_then(|segment| segment.category().map(str::to_owned))
}

/// Reads the selected segment's item label.
pub(crate) fn selected_item(app: &ComposerApp) -> Option<String> {
    app.session()
        .segments()
        .get(app.cursor_position())
        .and_then(|segment| segment.item().map(str::to_owned))
}

/// Reads the selected segment's characteristic labels.
pub(crate) fn selected_characteristics(app: &ComposerApp) -> Vec<String> {
    app.session()
        .segments()
        .get(app.cursor_position())
        .map(|segment| segment.characteristics().to_vec())
        .unwrap_or_default()
}

/// Reads the selected segment's star rating.
pub(crate) fn selected_rating(app: &ComposerApp) -> Option<u8> {
    app.session()
        .segments()
        .get(app.cursor_position())
        .and_then(|segment| segment.rating().map(Rating::value))
}
