//! Shared numeric constants for the dial crate.

// ── View box ────────────────────────────────────────────────────

/// Width of the dial SVG view box.
pub const VIEW_BOX_WIDTH: f64 = 300.0;

/// Height of the dial SVG view box. The extra 20 units below the flat edge
/// leave room for the needle hub.
pub const VIEW_BOX_HEIGHT: f64 = 170.0;

/// Dial centre, x, in view-box units.
pub const DIAL_CENTER_X: f64 = 150.0;

/// Dial centre, y, in view-box units. Sits on the flat edge of the semicircle.
pub const DIAL_CENTER_Y: f64 = 150.0;

/// Face radius in view-box units.
pub const DIAL_RADIUS: f64 = 120.0;

// ── Angles ──────────────────────────────────────────────────────

/// Left end of the dial in game degrees.
pub const GAME_ANGLE_MIN: f64 = 0.0;

/// Right end of the dial in game degrees.
pub const GAME_ANGLE_MAX: f64 = 180.0;

/// Straight up. The target wedge is drawn here before rotation.
pub const GAME_ANGLE_CENTER: f64 = 90.0;

/// Lowest whole-degree target a spin can land on (inclusive).
pub const TARGET_MIN_DEG: u16 = 20;

/// Upper bound for spin targets (exclusive).
pub const TARGET_MAX_DEG: u16 = 160;

/// Minimum rotation added by a single spin: seven full turns.
pub const MIN_SPIN_DEG: f64 = 7.0 * 360.0;
