use super::*;

#[test]
fn plain_tap_passes() {
    let mut g = GestureTracker::default();
    assert!(g.take_tap(1000.0));
}

#[test]
fn drag_only_starts_while_guessing() {
    let mut g = GestureTracker::default();
    assert!(!g.pointer_down(GamePhase::ViewTarget));
    assert!(!g.is_dragging());
    assert!(g.pointer_down(GamePhase::Guessing));
    assert!(g.is_dragging());
}

#[test]
fn click_right_after_release_is_swallowed() {
    let mut g = GestureTracker::default();
    g.pointer_down(GamePhase::Guessing);
    g.pointer_up(500.0);
    assert!(!g.take_tap(510.0));
}

#[test]
fn suppression_is_consumed_by_first_tap() {
    let mut g = GestureTracker::default();
    g.pointer_down(GamePhase::Guessing);
    g.pointer_up(500.0);
    assert!(!g.take_tap(510.0));
    assert!(g.take_tap(520.0));
}

#[test]
fn tap_after_window_passes() {
    let mut g = GestureTracker::default();
    g.pointer_down(GamePhase::Guessing);
    g.pointer_up(500.0);
    assert!(g.take_tap(701.0));
}

#[test]
fn window_edge_is_still_swallowed() {
    let mut g = GestureTracker::new(200.0);
    g.pointer_down(GamePhase::Guessing);
    g.pointer_up(100.0);
    assert!(!g.take_tap(300.0));
}

#[test]
fn pointer_up_without_drag_does_not_arm() {
    let mut g = GestureTracker::default();
    g.pointer_down(GamePhase::SetupTarget);
    g.pointer_up(10.0);
    assert!(g.take_tap(20.0));
}

#[test]
fn tap_during_drag_is_swallowed() {
    let mut g = GestureTracker::default();
    g.pointer_down(GamePhase::Guessing);
    assert!(!g.take_tap(5.0));
}

#[test]
fn cancel_does_not_arm_suppression() {
    let mut g = GestureTracker::default();
    g.pointer_down(GamePhase::Guessing);
    g.cancel();
    assert!(!g.is_dragging());
    assert!(g.take_tap(10.0));
}
