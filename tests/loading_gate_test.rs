//! Loading gate: arm, supersede, poll, cancel — with explicit instants.

use std::time::{Duration, Instant};

use gridwatch::modules::assets::{AssetsView, LoadingGate};

const DELAY: Duration = Duration::from_millis(500);

#[test]
fn test_arm_and_poll_lifecycle() {
    let t0 = Instant::now();
    let mut gate = LoadingGate::new(Some(DELAY));
    assert!(!gate.is_loading());

    gate.arm(t0);
    assert!(gate.is_loading());
    assert!(!gate.poll(t0 + Duration::from_millis(300)));
    assert!(gate.is_loading());

    assert!(gate.poll(t0 + Duration::from_millis(500)));
    assert!(!gate.is_loading());
    // Completion is only reported once
    assert!(!gate.poll(t0 + Duration::from_millis(700)));
}

#[test]
fn test_rearming_supersedes_the_pending_deadline() {
    let t0 = Instant::now();
    let mut gate = LoadingGate::new(Some(DELAY));
    gate.arm(t0);
    gate.arm(t0 + Duration::from_millis(400));

    // The first deadline has passed; the superseding one has not
    assert!(!gate.poll(t0 + Duration::from_millis(600)));
    assert!(gate.is_loading());
    assert!(gate.poll(t0 + Duration::from_millis(900)));
}

#[test]
fn test_disabled_gate_never_loads() {
    let t0 = Instant::now();
    let mut gate = LoadingGate::disabled();
    gate.arm(t0);
    assert!(!gate.is_loading());
    assert!(!gate.poll(t0 + Duration::from_secs(10)));
}

#[test]
fn test_cancel_drops_the_pending_deadline() {
    let t0 = Instant::now();
    let mut gate = LoadingGate::new(Some(DELAY));
    gate.arm(t0);
    gate.cancel();
    assert!(!gate.is_loading());
    assert!(!gate.poll(t0 + Duration::from_secs(1)));
}

#[test]
fn test_transition_arms_the_view_and_announces_once_settled() {
    let t0 = Instant::now();
    let mut assets =
        AssetsView::with_store(gridwatch::domain::assets::mock_assets(), Some(DELAY), 10, None);

    assets.push_query_char(t0, 'w');
    assert!(assets.is_loading());
    // Not settled yet: nothing to announce
    assert_eq!(assets.on_tick(t0 + Duration::from_millis(100)), None);

    // A newer transition restarts the window
    assets.push_query_char(t0 + Duration::from_millis(400), 't');
    assert_eq!(assets.on_tick(t0 + Duration::from_millis(600)), None);
    assert!(assets.is_loading());

    // Settles 500ms after the second transition, announcing its count
    let announced = assets.on_tick(t0 + Duration::from_millis(900));
    assert_eq!(announced, Some(2)); // "wt" matches the two wind turbines
    assert!(!assets.is_loading());
    assert_eq!(assets.on_tick(t0 + Duration::from_secs(2)), None);
}

#[test]
fn test_cancel_loading_suppresses_stale_announcements() {
    let t0 = Instant::now();
    let mut assets =
        AssetsView::with_store(gridwatch::domain::assets::mock_assets(), Some(DELAY), 10, None);

    assets.push_query_char(t0, 'w');
    assets.cancel_loading();
    assert!(!assets.is_loading());
    assert_eq!(assets.on_tick(t0 + Duration::from_secs(5)), None);
}
