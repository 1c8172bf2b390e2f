use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;
use crate::fallback::fallback_cards;

fn rng() -> SmallRng {
    SmallRng::seed_from_u64(7)
}

#[test]
fn draw_from_empty_pool_is_none() {
    let mut pool = CardPool::default();
    assert_eq!(pool.draw(&mut rng()), None);
    assert_eq!(pool.len(), 0);
}

#[test]
fn draining_yields_every_card_exactly_once() {
    let all = fallback_cards();
    let mut pool = CardPool::new(all.clone());
    let mut rng = rng();
    let mut seen = HashSet::new();
    while let Some(card) = pool.draw(&mut rng) {
        assert!(seen.insert(card), "card drawn twice");
    }
    assert_eq!(seen.len(), all.len());
    assert!(pool.is_empty());
    assert_eq!(pool.draw(&mut rng), None);
}

#[test]
fn draw_shrinks_by_one() {
    let mut pool = CardPool::new(fallback_cards());
    pool.draw(&mut rng());
    assert_eq!(pool.len(), 14);
}

#[test]
fn extend_appends_behind_remaining() {
    let mut pool = CardPool::new(fallback_cards()[..2].to_vec());
    pool.extend(fallback_cards()[2..5].to_vec());
    assert_eq!(pool.len(), 5);
    assert_eq!(pool.cards()[2], fallback_cards()[2]);
}

#[test]
fn replace_discards_remaining() {
    let mut pool = CardPool::new(fallback_cards());
    pool.replace(fallback_cards()[..1].to_vec());
    assert_eq!(pool.cards(), &fallback_cards()[..1]);
}

#[test]
fn needs_refill_only_when_low_but_not_empty() {
    let mut pool = CardPool::new(fallback_cards()[..3].to_vec());
    assert!(!pool.needs_refill(3));
    pool.draw(&mut rng());
    assert!(pool.needs_refill(3));
    pool.clear();
    assert!(!pool.needs_refill(3));
    assert!(pool.is_empty());
}

#[test]
fn draws_are_spread_across_the_pool() {
    let mut firsts = HashSet::new();
    for seed in 0..40 {
        let mut pool = CardPool::new(fallback_cards());
        let mut rng = SmallRng::seed_from_u64(seed);
        if let Some(card) = pool.draw(&mut rng) {
            firsts.insert(card);
        }
    }
    assert!(firsts.len() > 5, "only {} distinct first draws", firsts.len());
}
