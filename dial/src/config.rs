//! Tunable timings and thresholds for a game session.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_ROUND_TRANSITION_MS: u32 = 500;
pub const DEFAULT_SPIN_DURATION_MS: u32 = 3000;
pub const DEFAULT_REFILL_THRESHOLD: usize = 3;
pub const DEFAULT_TAP_SUPPRESS_MS: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    /// Delay between entering `LoadingCard` and revealing the next card.
    pub round_transition_ms: u32,
    /// Length of the spin animation; the target is revealed when it ends.
    pub spin_duration_ms: u32,
    /// A background refill is requested when the pool drops below this.
    pub refill_threshold: usize,
    /// Window after a drag release during which the next tap is swallowed.
    pub tap_suppress_ms: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            round_transition_ms: DEFAULT_ROUND_TRANSITION_MS,
            spin_duration_ms: DEFAULT_SPIN_DURATION_MS,
            refill_threshold: DEFAULT_REFILL_THRESHOLD,
            tap_suppress_ms: DEFAULT_TAP_SUPPRESS_MS,
        }
    }
}
