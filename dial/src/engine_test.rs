#![allow(clippy::float_cmp)]

use std::collections::HashSet;

use super::*;
use crate::consts::MIN_SPIN_DEG;
use crate::fallback::fallback_cards;
use crate::theme::CARD_THEMES;

// =============================================================
// Helpers
// =============================================================

fn game() -> Game {
    Game::seeded(GameConfig::default(), 42)
}

fn fetch_of(effects: &[Effect]) -> FetchTicket {
    effects
        .iter()
        .find_map(|e| match e {
            Effect::Fetch(t) => Some(*t),
            _ => None,
        })
        .expect("fetch effect")
}

fn timer_of(effects: &[Effect], kind: TimerKind) -> (TimerToken, u32) {
    effects
        .iter()
        .find_map(|e| match e {
            Effect::Schedule { token, delay_ms } if token.kind == kind => Some((*token, *delay_ms)),
            _ => None,
        })
        .expect("schedule effect")
}

fn fetches(effects: &[Effect]) -> usize {
    effects.iter().filter(|e| matches!(e, Effect::Fetch(_))).count()
}

/// Fresh session that has dealt its first card from the fallback list.
fn booted() -> Game {
    let mut g = game();
    let fx = g.initialize();
    let fx = g.on_batch(fetch_of(&fx), Err("offline".into()));
    let (token, _) = timer_of(&fx, TimerKind::RoundStart);
    assert!(g.on_timer(token).is_empty());
    g
}

/// SetupTarget -> spin -> ViewTarget -> Guessing.
fn to_guessing(g: &mut Game) {
    let fx = g.advance();
    let (token, _) = timer_of(&fx, TimerKind::SpinComplete);
    g.on_timer(token);
    g.advance();
    assert_eq!(g.phase(), GamePhase::Guessing);
}

/// Reveal -> next card dealt.
fn deal_next(g: &mut Game) -> Vec<Effect> {
    let fx = g.advance();
    let (token, _) = timer_of(&fx, TimerKind::RoundStart);
    g.on_timer(token);
    fx
}

// =============================================================
// Session start
// =============================================================

#[test]
fn initialize_requests_one_replace_batch() {
    let mut g = game();
    let fx = g.initialize();
    assert_eq!(fx.len(), 1);
    assert_eq!(fetch_of(&fx).purpose, FetchPurpose::Replace);
    assert_eq!(g.phase(), GamePhase::LoadingCard);
}

#[test]
fn initialize_twice_does_nothing() {
    let mut g = game();
    g.initialize();
    assert!(g.initialize().is_empty());
}

#[test]
fn fallback_session_starts_in_setup_target() {
    let g = booted();
    assert_eq!(g.phase(), GamePhase::SetupTarget);
    let card = g.card().expect("card");
    assert!(fallback_cards().contains(card));
    assert_eq!(g.pool_len(), 14);
    assert_eq!(g.target(), None);
    assert_eq!(g.guess(), 0.0);
    assert!(CARD_THEMES.contains(&g.theme()));
}

#[test]
fn provider_batch_is_used_when_present() {
    let mut g = game();
    let fx = g.initialize();
    let cards = vec![ConceptCard::new("Lua", "Sol").unwrap()];
    let fx = g.on_batch(fetch_of(&fx), Ok(cards.clone()));
    let (token, delay) = timer_of(&fx, TimerKind::RoundStart);
    assert_eq!(delay, 500);
    assert_eq!(g.phase(), GamePhase::LoadingCard);
    g.on_timer(token);
    assert_eq!(g.card(), Some(&cards[0]));
    assert_eq!(g.pool_len(), 0);
}

#[test]
fn empty_batch_falls_back() {
    let mut g = game();
    let fx = g.initialize();
    g.on_batch(fetch_of(&fx), Ok(Vec::new()));
    assert_eq!(g.pool_len(), 15);
}

#[test]
fn advance_is_ignored_while_loading() {
    let mut g = game();
    g.initialize();
    assert!(g.advance().is_empty());
    assert_eq!(g.phase(), GamePhase::LoadingCard);
}

// =============================================================
// Spin
// =============================================================

#[test]
fn spin_picks_whole_degree_target_in_range() {
    for seed in 0..50 {
        let mut g = Game::seeded(GameConfig::default(), seed);
        let fx = g.initialize();
        let fx = g.on_batch(fetch_of(&fx), Err("x".into()));
        g.on_timer(timer_of(&fx, TimerKind::RoundStart).0);
        g.advance();
        let t = g.target().expect("target");
        assert!((20.0..160.0).contains(&t), "target {t}");
        assert_eq!(t.fract(), 0.0);
    }
}

#[test]
fn spin_schedules_completion_and_turns_the_wedge() {
    let mut g = booted();
    let fx = g.advance();
    let (_, delay) = timer_of(&fx, TimerKind::SpinComplete);
    assert_eq!(delay, 3000);
    assert!(g.is_spinning());
    assert_eq!(g.phase(), GamePhase::SetupTarget);
    assert!(g.display_rotation() >= MIN_SPIN_DEG);
}

#[test]
fn taps_during_spin_do_not_respin() {
    let mut g = booted();
    g.advance();
    let target = g.target();
    let rotation = g.display_rotation();
    assert!(g.advance().is_empty());
    assert!(g.advance().is_empty());
    assert_eq!(g.target(), target);
    assert_eq!(g.display_rotation(), rotation);
}

#[test]
fn spin_completion_shows_target() {
    let mut g = booted();
    let fx = g.advance();
    g.on_timer(timer_of(&fx, TimerKind::SpinComplete).0);
    assert!(!g.is_spinning());
    assert_eq!(g.phase(), GamePhase::ViewTarget);
}

#[test]
fn display_rotation_never_decreases_across_rounds() {
    let mut g = booted();
    let mut last = g.display_rotation();
    for _ in 0..6 {
        to_guessing(&mut g);
        let now = g.display_rotation();
        assert!(now - last >= MIN_SPIN_DEG);
        last = now;
        g.advance();
        deal_next(&mut g);
    }
}

// =============================================================
// Guess & reveal
// =============================================================

#[test]
fn guess_is_only_taken_while_guessing() {
    let mut g = booted();
    assert!(!g.set_guess(45.0));
    to_guessing(&mut g);
    assert!(g.set_guess(45.0));
    assert_eq!(g.guess(), 45.0);
}

#[test]
fn guess_is_clamped_and_nan_ignored() {
    let mut g = booted();
    to_guessing(&mut g);
    assert!(g.set_guess(200.0));
    assert_eq!(g.guess(), 180.0);
    assert!(!g.set_guess(f64::NAN));
    assert_eq!(g.guess(), 180.0);
}

#[test]
fn drag_to_maps_pointer_to_guess() {
    let mut g = booted();
    to_guessing(&mut g);
    let bounds = DialBounds::new(0.0, 0.0, 300.0, 170.0);
    assert!(g.drag_to(Point::new(150.0, 30.0), &bounds));
    assert!((g.guess() - 90.0).abs() < 1e-9);
    assert!(!g.drag_to(Point::new(150.0, 30.0), &DialBounds::default()));
}

#[test]
fn reveal_scores_reference_guesses() {
    for (guess, points) in [(86.0, 4), (100.0, 3), (73.0, 2), (50.0, 0)] {
        let mut g = booted();
        to_guessing(&mut g);
        g.target = Some(90.0);
        g.set_guess(guess);
        g.advance();
        assert_eq!(g.phase(), GamePhase::Reveal);
        assert_eq!(g.score().map(|s| s.points), Some(points), "guess {guess}");
    }
}

#[test]
fn reveal_message_matches_tier() {
    let mut g = booted();
    to_guessing(&mut g);
    g.target = Some(90.0);
    g.set_guess(86.0);
    g.advance();
    assert_eq!(g.score().map(|s| s.message), Some("TRANSMISSÃO DE PENSAMENTO!"));
}

#[test]
fn guess_frozen_after_reveal() {
    let mut g = booted();
    to_guessing(&mut g);
    g.set_guess(30.0);
    g.advance();
    assert!(!g.set_guess(120.0));
    assert_eq!(g.guess(), 30.0);
}

// =============================================================
// Next card & pool
// =============================================================

#[test]
fn next_card_clears_round_state() {
    let mut g = booted();
    to_guessing(&mut g);
    g.set_guess(120.0);
    g.advance();
    let fx = g.advance();
    assert_eq!(g.phase(), GamePhase::LoadingCard);
    assert_eq!(g.card(), None);
    assert_eq!(g.target(), None);
    assert_eq!(g.score(), None);
    assert_eq!(g.guess(), 0.0);
    g.on_timer(timer_of(&fx, TimerKind::RoundStart).0);
    assert_eq!(g.phase(), GamePhase::SetupTarget);
}

#[test]
fn cards_do_not_repeat_until_pool_drains() {
    let mut g = booted();
    let mut seen = HashSet::new();
    seen.insert(g.card().cloned().expect("card"));
    for _ in 0..14 {
        to_guessing(&mut g);
        g.advance();
        deal_next(&mut g);
        assert!(seen.insert(g.card().cloned().expect("card")), "repeat card");
    }
    assert_eq!(seen.len(), 15);
}

#[test]
fn low_pool_requests_background_refill() {
    let mut g = booted();
    g.pool.replace(fallback_cards()[..2].to_vec());
    to_guessing(&mut g);
    g.advance();
    let fx = g.advance();
    let ticket = fetch_of(&fx);
    assert_eq!(ticket.purpose, FetchPurpose::Refill);
    timer_of(&fx, TimerKind::RoundStart);

    g.on_batch(ticket, Ok(fallback_cards()[5..9].to_vec()));
    assert_eq!(g.pool_len(), 6);
    assert_eq!(g.phase(), GamePhase::LoadingCard);
}

#[test]
fn refill_is_not_requested_twice() {
    let mut g = booted();
    g.pool.replace(fallback_cards()[..2].to_vec());
    to_guessing(&mut g);
    g.advance();
    let fx = deal_next(&mut g);
    assert_eq!(fetches(&fx), 1);

    to_guessing(&mut g);
    g.advance();
    let fx = deal_next(&mut g);
    assert_eq!(fetches(&fx), 0);
}

#[test]
fn empty_pool_blocks_on_fresh_batch() {
    let mut g = booted();
    g.pool.clear();
    to_guessing(&mut g);
    g.advance();
    let fx = g.advance();
    assert_eq!(g.phase(), GamePhase::LoadingCard);
    let ticket = fetch_of(&fx);
    assert_eq!(ticket.purpose, FetchPurpose::Blocking);
    assert_eq!(fx.len(), 1);

    let fx = g.on_batch(ticket, Ok(fallback_cards()[..4].to_vec()));
    let (token, _) = timer_of(&fx, TimerKind::RoundStart);
    g.on_timer(token);
    assert_eq!(g.phase(), GamePhase::SetupTarget);
    assert_eq!(g.pool_len(), 3);
}

#[test]
fn empty_pool_waits_on_refill_already_in_flight() {
    let mut g = booted();
    g.pool.replace(fallback_cards()[..1].to_vec());
    to_guessing(&mut g);
    g.advance();
    let fx = deal_next(&mut g);
    let refill = fetch_of(&fx);
    assert_eq!(g.pool_len(), 0);

    to_guessing(&mut g);
    g.advance();
    let fx = g.advance();
    assert!(fx.is_empty());
    assert_eq!(g.phase(), GamePhase::LoadingCard);

    let fx = g.on_batch(refill, Ok(fallback_cards()[..3].to_vec()));
    timer_of(&fx, TimerKind::RoundStart);
}

#[test]
fn start_round_is_ignored_while_pending() {
    let mut g = booted();
    let first = g.start_round();
    assert_eq!(first.len(), 1);
    assert!(g.start_round().is_empty());
}

// =============================================================
// Restart & stale completions
// =============================================================

#[test]
fn restart_during_guessing_drops_round_immediately() {
    let mut g = booted();
    to_guessing(&mut g);
    g.set_guess(130.0);
    let fx = g.restart();
    assert_eq!(g.phase(), GamePhase::LoadingCard);
    assert_eq!(g.target(), None);
    assert_eq!(g.guess(), 0.0);
    assert_eq!(g.card(), None);
    assert_eq!(g.pool_len(), 0);
    assert_eq!(fetch_of(&fx).purpose, FetchPurpose::Replace);
}

#[test]
fn restart_cancels_pending_spin() {
    let mut g = booted();
    let fx = g.advance();
    let (spin, _) = timer_of(&fx, TimerKind::SpinComplete);
    let fx = g.restart();
    assert!(fx.contains(&Effect::Cancel(spin)));
    assert!(!g.is_spinning());

    assert!(g.on_timer(spin).is_empty());
    assert_eq!(g.phase(), GamePhase::LoadingCard);
}

#[test]
fn stale_round_timer_after_restart_is_dropped() {
    let mut g = booted();
    to_guessing(&mut g);
    g.advance();
    let fx = g.advance();
    let (round, _) = timer_of(&fx, TimerKind::RoundStart);
    let fx = g.restart();
    assert!(fx.contains(&Effect::Cancel(round)));
    g.on_timer(round);
    assert_eq!(g.phase(), GamePhase::LoadingCard);
    assert_eq!(g.card(), None);
}

#[test]
fn stale_batch_after_restart_is_dropped() {
    let mut g = game();
    let old = fetch_of(&g.initialize());
    let fresh = fetch_of(&g.restart());
    assert!(g.on_batch(old, Ok(fallback_cards())).is_empty());
    assert_eq!(g.pool_len(), 0);

    let fx = g.on_batch(fresh, Ok(fallback_cards()[..2].to_vec()));
    assert_eq!(g.pool_len(), 2);
    timer_of(&fx, TimerKind::RoundStart);
}

#[test]
fn restart_keeps_rotation_monotonic() {
    let mut g = booted();
    g.advance();
    let before = g.display_rotation();
    let fx = g.restart();
    let fx = g.on_batch(fetch_of(&fx), Err("x".into()));
    g.on_timer(timer_of(&fx, TimerKind::RoundStart).0);
    g.advance();
    assert!(g.display_rotation() - before >= MIN_SPIN_DEG);
}

#[test]
fn duplicate_batch_delivery_is_ignored() {
    let mut g = game();
    let ticket = fetch_of(&g.initialize());
    g.on_batch(ticket, Err("x".into()));
    assert!(g.on_batch(ticket, Err("x".into())).is_empty());
    assert_eq!(g.pool_len(), 15);
}
