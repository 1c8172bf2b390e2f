//! No-repeat concept card pool.
//!
//! Cards leave the pool when drawn and only come back through a provider
//! batch, so a card never repeats until the pool is replenished.

#[cfg(test)]
#[path = "pool_test.rs"]
mod pool_test;

use rand::Rng;

use crate::card::ConceptCard;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardPool {
    cards: Vec<ConceptCard>,
}

impl CardPool {
    #[must_use]
    pub fn new(cards: Vec<ConceptCard>) -> Self {
        Self { cards }
    }

    /// Remove and return a uniformly random card, or `None` when empty.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<ConceptCard> {
        if self.cards.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.cards.len());
        Some(self.cards.swap_remove(index))
    }

    /// Append a batch behind the remaining cards.
    pub fn extend(&mut self, cards: impl IntoIterator<Item = ConceptCard>) {
        self.cards.extend(cards);
    }

    /// Discard what is left and start over from `cards`.
    pub fn replace(&mut self, cards: Vec<ConceptCard>) {
        self.cards = cards;
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// True when some cards remain but fewer than `threshold`.
    #[must_use]
    pub fn needs_refill(&self, threshold: usize) -> bool {
        !self.cards.is_empty() && self.cards.len() < threshold
    }

    #[must_use]
    pub fn cards(&self) -> &[ConceptCard] {
        &self.cards
    }
}
