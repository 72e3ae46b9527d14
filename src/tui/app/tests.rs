//! Tests for the composer TUI application model.

use rstest::{fixture, rstest};

use super::*;
use crate::tui::messages::AppMsg;

#[fixture]
fn rated_session() -> ReviewSession {
    let mut session = ReviewSession::new();
    let index = session.add_segment();
    session.set_category(index, "Food").expect("set category");
    session.set_item(index, "Appetizer").expect("set item");
    session
        .toggle_characteristic(index, "Flavorful")
        .expect("toggle characteristic");
    session.set_rating(index, 5).expect("set rating");
    session
}

fn resized(mut app: ComposerApp) -> ComposerApp {
    app.handle_message(&AppMsg::WindowResized {
        width: 120,
        height: 40,
    });
    app
}

#[rstest]
fn new_app_starts_empty() {
    let app = ComposerApp::new();

    assert!(app.session().is_empty());
    assert_eq!(app.cursor_position(), 0);
    assert_eq!(app.overlay(), OverlayKind::None);
    assert!(app.generated_review().is_none());
    assert!(app.notice().is_none());
    assert_eq!(app.copy_feedback(), &CopyFeedback::Idle);
}

#[rstest]
fn add_segment_selects_the_new_segment() {
    let mut app = ComposerApp::new();

    app.handle_message(&AppMsg::AddSegment);
    assert_eq!(app.session().len(), 1);
    assert_eq!(app.cursor_position(), 0);

    app.handle_message(&AppMsg::AddSegment);
    assert_eq!(app.session().len(), 2);
    assert_eq!(app.cursor_position(), 1);
}

#[rstest]
fn cursor_navigation_stays_within_session_bounds() {
    let mut app = ComposerApp::new();
    for _ in 0..3 {
        app.handle_message(&AppMsg::AddSegment);
    }
    assert_eq!(app.cursor_position(), 2);

    app.handle_message(&AppMsg::CursorDown);
    assert_eq!(app.cursor_position(), 2);

    app.handle_message(&AppMsg::CursorUp);
    app.handle_message(&AppMsg::CursorUp);
    assert_eq!(app.cursor_position(), 0);

    app.handle_message(&AppMsg::CursorUp);
    assert_eq!(app.cursor_position(), 0);
}

#[rstest]
fn set_rating_requires_a_segment() {
    let mut app = ComposerApp::new();

    app.handle_message(&AppMsg::SetRating(4));

    assert!(app.session().is_empty());
    assert!(
        app.notice()
            .is_some_and(|notice| notice.contains("Add a segment first"))
    );
}

#[rstest]
fn set_rating_applies_to_the_selected_segment() {
    let mut app = ComposerApp::new();
    app.handle_message(&AppMsg::AddSegment);

    app.handle_message(&AppMsg::SetRating(4));

    let segment = &app.session().segments()[0];
    assert_eq!(segment.rating().map(crate::review::Rating::value), Some(4));
    assert!(app.notice().is_none());
}

#[rstest]
fn with_session_seeds_the_session(rated_session: ReviewSession) {
    let app = ComposerApp::with_session(rated_session);

    assert_eq!(app.session().len(), 1);
    assert!(app.generated_review().is_none());
}

#[rstest]
fn escape_dismisses_the_inline_notice() {
    let mut app = ComposerApp::new();
    app.handle_message(&AppMsg::SetRating(3));
    assert!(app.notice().is_some());

    app.handle_message(&AppMsg::EscapePressed);

    assert!(app.notice().is_none());
}

#[rstest]
fn quit_returns_a_command() {
    let mut app = ComposerApp::new();

    assert!(app.handle_message(&AppMsg::Quit).is_some());
}

#[rstest]
fn toggle_help_flips_the_overlay() {
    let mut app = ComposerApp::new();
    assert!(!app.is_help_shown());

    app.handle_message(&AppMsg::ToggleHelp);
    assert!(app.is_help_shown());

    app.handle_message(&AppMsg::ToggleHelp);
    assert!(!app.is_help_shown());
}

#[rstest]
fn resize_updates_the_segment_list_window() {
    let mut app = ComposerApp::new();

    app.handle_message(&AppMsg::WindowResized {
        width: 100,
        height: 30,
    });

    assert_eq!(app.segment_list.visible_height(), 18);
}

#[rstest]
fn view_shows_placeholders_before_any_input() {
    let app = resized(ComposerApp::new());

    let frame = bubbletea_rs::Model::view(&app);

    assert!(frame.contains("Morsel - Restaurant Review Composer"));
    assert!(frame.contains("No segments yet"));
    assert!(frame.contains("No review generated yet"));
    assert!(frame.contains("g:generate"));
}

#[rstest]
fn view_renders_the_generated_review(rated_session: ReviewSession) {
    let mut app = resized(ComposerApp::with_session(rated_session));
    app.handle_message(&AppMsg::GenerateRequested);

    let frame = bubbletea_rs::Model::view(&app);

    assert!(frame.contains("The appetizer (food) was flavorful and deserves 5 stars."));
    assert!(frame.contains("excellent experience!"));
    assert!(frame.contains("Sentiment: excellent"));
}

#[rstest]
fn view_renders_the_open_overlay_instead_of_the_list(rated_session: ReviewSession) {
    let mut app = resized(ComposerApp::with_session(rated_session));
    app.handle_message(&AppMsg::OpenCategoryPicker);

    let frame = bubbletea_rs::Model::view(&app);

    assert!(frame.contains("Select a category"));
    assert!(!frame.contains("No review generated yet"));
}
