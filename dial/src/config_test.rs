#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_matches_animation_timings() {
    let cfg = GameConfig::default();
    assert_eq!(cfg.round_transition_ms, 500);
    assert_eq!(cfg.spin_duration_ms, 3000);
}

#[test]
fn default_refill_threshold_is_three() {
    assert_eq!(GameConfig::default().refill_threshold, 3);
}

#[test]
fn default_tap_suppression_window() {
    assert_eq!(GameConfig::default().tap_suppress_ms, 200.0);
}
