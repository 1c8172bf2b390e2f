//! Round phase controller.
//!
//! DESIGN
//! ======
//! [`Game`] is the one state object for a session. Every input is a method
//! that mutates the state and returns the [`Effect`]s the host must carry out:
//! start a timer, cancel a timer, or fetch a batch of cards. The host reports
//! completions back through [`Game::on_timer`] and [`Game::on_batch`], so the
//! whole machine runs without a clock or a browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! ```text
//! tap ──> advance()            timer fires ──> on_timer(token)
//! restart button ──> restart() fetch resolves ──> on_batch(ticket, result)
//! drag ──> drag_to() / set_guess()
//!                 │
//!                 └──> Vec<Effect> ──> host (gloo timers, gloo-net fetch)
//! ```
//!
//! Phases cycle `LoadingCard → SetupTarget → ViewTarget → Guessing → Reveal`.
//! Spinning is a flag on `SetupTarget`; while it is set taps are ignored.
//! Every token and ticket carries the epoch it was issued in, and only the
//! most recent one of each kind is honoured, so stale completions never
//! change state.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::bands::{Score, score};
use crate::card::ConceptCard;
use crate::config::GameConfig;
use crate::consts::{TARGET_MAX_DEG, TARGET_MIN_DEG};
use crate::fallback::fallback_cards;
use crate::geometry::{DialBounds, Point, clamp_game_angle, next_display_rotation, pointer_to_game_angle};
use crate::phase::GamePhase;
use crate::pool::CardPool;
use crate::schedule::{FetchPurpose, FetchTicket, Scheduler, TimerKind, TimerToken};
use crate::theme::CardTheme;

/// Work the host must perform on the engine's behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Start a one-shot timer; report it back with [`Game::on_timer`].
    Schedule { token: TimerToken, delay_ms: u32 },
    /// Drop a timer previously scheduled.
    Cancel(TimerToken),
    /// Request a batch of cards; report it back with [`Game::on_batch`].
    Fetch(FetchTicket),
}

#[derive(Debug)]
pub struct Game<R = SmallRng> {
    config: GameConfig,
    rng: R,
    scheduler: Scheduler,

    phase: GamePhase,
    pool: CardPool,
    card: Option<ConceptCard>,
    theme: CardTheme,
    target: Option<f64>,
    guess: f64,
    score: Option<Score>,
    spinning: bool,
    display_rotation: f64,

    initialized: bool,
    /// A round is waiting for cards; the next accepted batch starts it.
    blocked_on_cards: bool,
    pending_round: Option<TimerToken>,
    pending_spin: Option<TimerToken>,
    /// Replace or blocking fetch in flight.
    awaiting: Option<FetchTicket>,
    /// Background refill in flight.
    refill: Option<FetchTicket>,
}

impl Game<SmallRng> {
    /// Game driven by a seeded `SmallRng`.
    #[must_use]
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Self::new(config, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    #[must_use]
    pub fn new(config: GameConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            scheduler: Scheduler::default(),
            phase: GamePhase::LoadingCard,
            pool: CardPool::default(),
            card: None,
            theme: CardTheme::default(),
            target: None,
            guess: 0.0,
            score: None,
            spinning: false,
            display_rotation: 0.0,
            initialized: false,
            blocked_on_cards: false,
            pending_round: None,
            pending_spin: None,
            awaiting: None,
            refill: None,
        }
    }

    // --- Session ---

    /// Request the first batch. The first round starts when it arrives.
    ///
    /// Calling this again after the first time does nothing; use
    /// [`Game::restart`] to start over.
    pub fn initialize(&mut self) -> Vec<Effect> {
        if self.initialized {
            return Vec::new();
        }
        self.initialized = true;
        self.phase = GamePhase::LoadingCard;
        self.blocked_on_cards = true;
        let ticket = self.scheduler.ticket(FetchPurpose::Replace);
        self.awaiting = Some(ticket);
        vec![Effect::Fetch(ticket)]
    }

    /// Throw the session away and start over from a fresh batch.
    ///
    /// Pending timers are cancelled and in-flight fetches invalidated. The
    /// phase drops to `LoadingCard` immediately.
    pub fn restart(&mut self) -> Vec<Effect> {
        let mut effects: Vec<Effect> = [self.pending_round.take(), self.pending_spin.take()]
            .into_iter()
            .flatten()
            .map(Effect::Cancel)
            .collect();

        self.scheduler.bump_epoch();
        self.initialized = true;
        self.awaiting = None;
        self.refill = None;
        self.pool.clear();
        self.clear_round();
        self.phase = GamePhase::LoadingCard;
        self.blocked_on_cards = true;

        let ticket = self.scheduler.ticket(FetchPurpose::Replace);
        self.awaiting = Some(ticket);
        effects.push(Effect::Fetch(ticket));
        log::info!("restart: epoch {}", self.scheduler.epoch());
        effects
    }

    /// Enter `LoadingCard` and schedule the next card to be drawn.
    ///
    /// Ignored while a round start is already pending.
    pub fn start_round(&mut self) -> Vec<Effect> {
        if self.pending_round.is_some() {
            return Vec::new();
        }
        let mut effects = Vec::new();
        if let Some(spin) = self.pending_spin.take() {
            effects.push(Effect::Cancel(spin));
        }
        self.clear_round();
        self.phase = GamePhase::LoadingCard;

        let token = self.scheduler.timer(TimerKind::RoundStart);
        self.pending_round = Some(token);
        effects.push(Effect::Schedule { token, delay_ms: self.config.round_transition_ms });
        effects
    }

    // --- Player input ---

    /// The single tap input.
    pub fn advance(&mut self) -> Vec<Effect> {
        if self.spinning {
            return Vec::new();
        }
        match self.phase {
            GamePhase::LoadingCard => Vec::new(),
            GamePhase::SetupTarget => self.spin(),
            GamePhase::ViewTarget => {
                self.phase = GamePhase::Guessing;
                Vec::new()
            }
            GamePhase::Guessing => {
                self.score = Some(self.target.map_or(Score::MISS, |t| score(t, self.guess)));
                self.phase = GamePhase::Reveal;
                Vec::new()
            }
            GamePhase::Reveal => self.next_card(),
        }
    }

    /// Move the needle. Returns whether the guess was accepted.
    ///
    /// Only `Guessing` takes a guess; non-finite angles are ignored and the
    /// rest are clamped to the dial.
    pub fn set_guess(&mut self, angle: f64) -> bool {
        if !self.phase.accepts_drag() {
            return false;
        }
        match clamp_game_angle(angle) {
            Some(a) => {
                self.guess = a;
                true
            }
            None => false,
        }
    }

    /// Move the needle toward a pointer position over the dial element.
    pub fn drag_to(&mut self, pointer: Point, bounds: &DialBounds) -> bool {
        pointer_to_game_angle(pointer, bounds).is_some_and(|a| self.set_guess(a))
    }

    // --- Completions ---

    pub fn on_timer(&mut self, token: TimerToken) -> Vec<Effect> {
        match token.kind {
            TimerKind::RoundStart => {
                if self.pending_round != Some(token) {
                    log::debug!("dropping stale timer {token:?}");
                    return Vec::new();
                }
                self.pending_round = None;
                self.deal()
            }
            TimerKind::SpinComplete => {
                if self.pending_spin != Some(token) {
                    log::debug!("dropping stale timer {token:?}");
                    return Vec::new();
                }
                self.pending_spin = None;
                self.spinning = false;
                self.phase = GamePhase::ViewTarget;
                Vec::new()
            }
        }
    }

    /// Accept a provider batch. Failed or empty batches are replaced by the
    /// built-in list.
    pub fn on_batch(&mut self, ticket: FetchTicket, result: Result<Vec<ConceptCard>, String>) -> Vec<Effect> {
        if !self.scheduler.is_current_epoch(ticket.epoch) {
            log::debug!("dropping batch from epoch {}", ticket.epoch);
            return Vec::new();
        }
        if self.awaiting == Some(ticket) {
            self.awaiting = None;
        } else if self.refill == Some(ticket) {
            self.refill = None;
        } else {
            log::debug!("dropping superseded batch {ticket:?}");
            return Vec::new();
        }

        let cards = match result {
            Ok(cards) if !cards.is_empty() => cards,
            Ok(_) => {
                log::warn!("provider returned no cards; using fallback list");
                fallback_cards()
            }
            Err(e) => {
                log::warn!("provider failed: {e}; using fallback list");
                fallback_cards()
            }
        };
        log::debug!("accepted {} cards for {:?}", cards.len(), ticket.purpose);

        match ticket.purpose {
            FetchPurpose::Replace => self.pool.replace(cards),
            FetchPurpose::Refill | FetchPurpose::Blocking => self.pool.extend(cards),
        }

        if self.blocked_on_cards && self.awaiting.is_none() {
            self.blocked_on_cards = false;
            return self.start_round();
        }
        Vec::new()
    }

    // --- Queries ---

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn card(&self) -> Option<&ConceptCard> {
        self.card.as_ref()
    }

    #[must_use]
    pub fn theme(&self) -> CardTheme {
        self.theme
    }

    #[must_use]
    pub fn target(&self) -> Option<f64> {
        self.target
    }

    #[must_use]
    pub fn guess(&self) -> f64 {
        self.guess
    }

    #[must_use]
    pub fn score(&self) -> Option<Score> {
        self.score
    }

    #[must_use]
    pub fn is_spinning(&self) -> bool {
        self.spinning
    }

    #[must_use]
    pub fn display_rotation(&self) -> f64 {
        self.display_rotation
    }

    #[must_use]
    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    // --- Internals ---

    fn clear_round(&mut self) {
        self.card = None;
        self.target = None;
        self.score = None;
        self.guess = 0.0;
        self.spinning = false;
    }

    fn spin(&mut self) -> Vec<Effect> {
        let target = f64::from(self.rng.random_range(TARGET_MIN_DEG..TARGET_MAX_DEG));
        self.target = Some(target);
        self.display_rotation = next_display_rotation(self.display_rotation, target);
        self.spinning = true;

        let token = self.scheduler.timer(TimerKind::SpinComplete);
        self.pending_spin = Some(token);
        vec![Effect::Schedule { token, delay_ms: self.config.spin_duration_ms }]
    }

    /// Draw the next card, or wait for cards if the pool is dry.
    fn deal(&mut self) -> Vec<Effect> {
        match self.pool.draw(&mut self.rng) {
            Some(card) => {
                self.card = Some(card);
                self.theme = CardTheme::pick(&mut self.rng);
                self.guess = 0.0;
                self.target = None;
                self.score = None;
                self.phase = GamePhase::SetupTarget;
                Vec::new()
            }
            None => self.wait_for_cards(),
        }
    }

    fn next_card(&mut self) -> Vec<Effect> {
        if self.pool.is_empty() {
            self.clear_round();
            self.phase = GamePhase::LoadingCard;
            return self.wait_for_cards();
        }
        let mut effects = Vec::new();
        if self.pool.needs_refill(self.config.refill_threshold) && self.refill.is_none() && self.awaiting.is_none() {
            let ticket = self.scheduler.ticket(FetchPurpose::Refill);
            self.refill = Some(ticket);
            effects.push(Effect::Fetch(ticket));
        }
        effects.extend(self.start_round());
        effects
    }

    /// Block the round on the next batch, fetching one unless a fetch is
    /// already in flight.
    fn wait_for_cards(&mut self) -> Vec<Effect> {
        self.blocked_on_cards = true;
        if self.awaiting.is_some() || self.refill.is_some() {
            return Vec::new();
        }
        let ticket = self.scheduler.ticket(FetchPurpose::Blocking);
        self.awaiting = Some(ticket);
        vec![Effect::Fetch(ticket)]
    }
}
