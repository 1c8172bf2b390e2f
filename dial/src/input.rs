//! Drag vs. tap disambiguation.
//!
//! Releasing a drag on the dial also produces a click. That click must not
//! reach `advance()`, or every guess would be revealed the moment the needle
//! is let go. [`GestureTracker`] swallows the first tap that arrives within
//! the suppression window after a drag ends.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::config::DEFAULT_TAP_SUPPRESS_MS;
use crate::phase::GamePhase;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureTracker {
    dragging: bool,
    released_at: Option<f64>,
    suppress_ms: f64,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(DEFAULT_TAP_SUPPRESS_MS)
    }
}

impl GestureTracker {
    #[must_use]
    pub fn new(suppress_ms: f64) -> Self {
        Self { dragging: false, released_at: None, suppress_ms }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Start a drag if the phase takes one. Returns whether a drag began.
    pub fn pointer_down(&mut self, phase: GamePhase) -> bool {
        self.dragging = phase.accepts_drag();
        self.dragging
    }

    /// End a drag, if one was active, and arm tap suppression.
    pub fn pointer_up(&mut self, now_ms: f64) {
        if self.dragging {
            self.dragging = false;
            self.released_at = Some(now_ms);
        }
    }

    /// Drop any active drag without arming suppression (pointer cancelled).
    pub fn cancel(&mut self) {
        self.dragging = false;
    }

    /// Whether a tap at `now_ms` should reach `advance()`.
    ///
    /// Consumes the suppression: only the first tap after a release can be
    /// swallowed.
    pub fn take_tap(&mut self, now_ms: f64) -> bool {
        if self.dragging {
            return false;
        }
        match self.released_at.take() {
            Some(released) => {
                let elapsed = now_ms - released;
                !(elapsed.is_finite() && (0.0..=self.suppress_ms).contains(&elapsed))
            }
            None => true,
        }
    }
}
