//! Detail overlay lifecycle: open, trap, close, focus restore.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gridwatch::core::Action;
use gridwatch::modules::assets::{AssetsView, OverlayControl};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn view() -> AssetsView {
    // Latency off so transitions settle immediately
    AssetsView::new(None, 10, None)
}

#[test]
fn test_open_then_escape_restores_cursor() {
    let mut assets = view();
    assets.cursor = 2;
    assert!(assets.open_overlay());
    let overlay = assets.overlay.as_ref().expect("overlay open");
    assert_eq!(overlay.focused, OverlayControl::Close);

    let action = assets.handle_overlay_key(key(KeyCode::Esc));
    assert_eq!(action, Action::None);
    assert!(assets.overlay.is_none());
    assert_eq!(assets.cursor, 2);
}

#[test]
fn test_open_fails_with_no_rows() {
    let mut assets = view();
    assets.query.set_query("no such asset");
    assert!(!assets.open_overlay());
    assert!(assets.overlay.is_none());
}

#[test]
fn test_focus_returns_to_first_row_when_opener_is_gone() {
    let mut assets = view();
    assets.cursor = 4;
    assert!(assets.open_overlay());

    // The result set shrinks underneath the overlay; the opener row is gone
    assets.query.set_query("turku");
    assets.handle_overlay_key(key(KeyCode::Esc));
    assert!(assets.overlay.is_none());
    assert_eq!(assets.cursor, 0);
}

#[test]
fn test_tab_cycles_and_wraps_in_both_directions() {
    let mut assets = view();
    assert!(assets.open_overlay());

    assets.handle_overlay_key(key(KeyCode::Tab));
    assert_eq!(
        assets.overlay.as_ref().map(|o| o.focused),
        Some(OverlayControl::CopyId),
    );
    assets.handle_overlay_key(key(KeyCode::Tab));
    assert_eq!(
        assets.overlay.as_ref().map(|o| o.focused),
        Some(OverlayControl::Close),
    );
    assets.handle_overlay_key(key(KeyCode::BackTab));
    assert_eq!(
        assets.overlay.as_ref().map(|o| o.focused),
        Some(OverlayControl::CopyId),
    );
}

#[test]
fn test_enter_activates_the_focused_control() {
    let mut assets = view();
    assets.cursor = 1;
    assert!(assets.open_overlay());
    let id = assets.overlay.as_ref().map(|o| o.asset.id.clone()).unwrap();

    assets.handle_overlay_key(key(KeyCode::Tab)); // focus Copy id
    let action = assets.handle_overlay_key(key(KeyCode::Enter));
    assert_eq!(action, Action::Copy(id));
    assert!(assets.overlay.is_some(), "copying must not dismiss");

    assets.handle_overlay_key(key(KeyCode::BackTab)); // back to Close
    let action = assets.handle_overlay_key(key(KeyCode::Enter));
    assert_eq!(action, Action::None);
    assert!(assets.overlay.is_none());
}

#[test]
fn test_other_keys_are_trapped_while_open() {
    let mut assets = view();
    assert!(assets.open_overlay());
    let before = assets.query.clone();

    for code in [
        KeyCode::Char('f'),
        KeyCode::Char('s'),
        KeyCode::Char('n'),
        KeyCode::Char('q'),
        KeyCode::Char('/'),
    ] {
        let action = assets.handle_overlay_key(key(code));
        assert_eq!(action, Action::None);
        assert!(assets.overlay.is_some());
    }
    assert_eq!(assets.query, before, "trapped keys must not mutate state");
}

#[test]
fn test_overlay_snapshot_is_independent_of_query_state() {
    let mut assets = view();
    assets.cursor = 0;
    assert!(assets.open_overlay());
    let shown = assets.overlay.as_ref().map(|o| o.asset.id.clone()).unwrap();

    // Filtering away the shown asset does not change the open overlay
    assets.query.set_query("zzz-no-match");
    assert_eq!(
        assets.overlay.as_ref().map(|o| o.asset.id.clone()),
        Some(shown),
    );
}
