//! Host-side game session: the engine, the gesture tracker and the timer
//! ledger behind one API that speaks in browser tasks.
//!
//! DESIGN
//! ======
//! The engine returns `Effect`s; the browser can only start timeouts and
//! spawn fetches. `GameSession` translates between the two. Cancellations are
//! absorbed by the [`TimerLedger`], so the page only ever sees
//! [`HostTask::Timer`] and [`HostTask::Fetch`], and every timer expiry or
//! fetch result comes back through [`GameSession::timer_fired`] or
//! [`GameSession::batch_arrived`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use dial::card::ConceptCard;
use dial::config::GameConfig;
use dial::engine::{Effect, Game};
use dial::geometry::{DialBounds, Point};
use dial::input::GestureTracker;
use dial::schedule::{FetchTicket, TimerLedger, TimerToken};

use super::game::GameView;

/// Work the page must start in the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostTask {
    /// Start a timeout; report it with [`GameSession::timer_fired`].
    Timer { token: TimerToken, delay_ms: u32 },
    /// Fetch a concept batch; report it with [`GameSession::batch_arrived`].
    Fetch(FetchTicket),
}

#[derive(Debug)]
pub struct GameSession {
    game: Game,
    gesture: GestureTracker,
    timers: TimerLedger,
}

impl GameSession {
    #[must_use]
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            gesture: GestureTracker::new(config.tap_suppress_ms),
            game: Game::seeded(config, seed),
            timers: TimerLedger::default(),
        }
    }

    #[must_use]
    pub fn view(&self) -> GameView {
        GameView::from_game(&self.game, self.gesture.is_dragging())
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Timers started and neither fired nor cancelled yet.
    #[must_use]
    pub fn armed_timers(&self) -> usize {
        self.timers.armed_len()
    }

    pub fn start(&mut self) -> Vec<HostTask> {
        let effects = self.game.initialize();
        self.apply(effects)
    }

    /// A click anywhere on the page. Swallowed right after a drag release.
    pub fn tap(&mut self, now_ms: f64) -> Vec<HostTask> {
        if !self.gesture.take_tap(now_ms) {
            return Vec::new();
        }
        let effects = self.game.advance();
        self.apply(effects)
    }

    pub fn restart(&mut self) -> Vec<HostTask> {
        self.gesture.cancel();
        let effects = self.game.restart();
        self.apply(effects)
    }

    /// Begin a needle drag. Returns `false` when the phase does not take one.
    pub fn drag_start(&mut self, pointer: Point, bounds: &DialBounds) -> bool {
        if !self.gesture.pointer_down(self.game.phase()) {
            return false;
        }
        self.game.drag_to(pointer, bounds);
        true
    }

    /// Returns whether the needle moved.
    pub fn drag_move(&mut self, pointer: Point, bounds: &DialBounds) -> bool {
        self.gesture.is_dragging() && self.game.drag_to(pointer, bounds)
    }

    /// Returns whether a drag was active.
    pub fn drag_end(&mut self, now_ms: f64) -> bool {
        if !self.gesture.is_dragging() {
            return false;
        }
        self.gesture.pointer_up(now_ms);
        true
    }

    /// A timeout expired. Cancelled or unknown tokens are dropped here.
    pub fn timer_fired(&mut self, token: TimerToken) -> Vec<HostTask> {
        if !self.timers.fire(token) {
            log::debug!("timer {token:?} was cancelled");
            return Vec::new();
        }
        let effects = self.game.on_timer(token);
        self.apply(effects)
    }

    pub fn batch_arrived(&mut self, ticket: FetchTicket, result: Result<Vec<ConceptCard>, String>) -> Vec<HostTask> {
        let effects = self.game.on_batch(ticket, result);
        self.apply(effects)
    }

    fn apply(&mut self, effects: Vec<Effect>) -> Vec<HostTask> {
        let mut tasks = Vec::with_capacity(effects.len());
        for effect in effects {
            match effect {
                Effect::Schedule { token, delay_ms } => {
                    self.timers.arm(token);
                    tasks.push(HostTask::Timer { token, delay_ms });
                }
                Effect::Cancel(token) => {
                    if !self.timers.cancel(token) {
                        log::debug!("cancel for inactive timer {token:?}");
                    }
                }
                Effect::Fetch(ticket) => tasks.push(HostTask::Fetch(ticket)),
            }
        }
        tasks
    }
}
