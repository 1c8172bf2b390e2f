//! Dial coordinate geometry.
//!
//! Game angles run from 0° at the dial's left end, through 90° straight up,
//! to 180° at its right end. Screen angles follow `atan2` in a y-down space:
//! 0° points right, +90° points down, -90° points up.
//!
//! The dial is drawn in a fixed 300×170 view box with its centre at
//! (150, 150), so the centre in screen space is found by scaling that point
//! into the measured element bounds.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::consts::{
    DIAL_CENTER_X, DIAL_CENTER_Y, GAME_ANGLE_CENTER, GAME_ANGLE_MAX, GAME_ANGLE_MIN, MIN_SPIN_DEG, VIEW_BOX_HEIGHT,
    VIEW_BOX_WIDTH,
};

/// A point in screen space (CSS pixels) or view-box space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Measured bounding box of the dial element, in the same space as pointer
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DialBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl DialBounds {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// False until layout has given the element a real, finite size.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        [self.left, self.top, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
            && self.width > 0.0
            && self.height > 0.0
    }

    /// The dial's visual centre in screen space.
    #[must_use]
    pub fn center(&self) -> Point {
        Point {
            x: self.left + (DIAL_CENTER_X / VIEW_BOX_WIDTH) * self.width,
            y: self.top + (DIAL_CENTER_Y / VIEW_BOX_HEIGHT) * self.height,
        }
    }
}

/// Convert a pointer position into a game angle in `[0, 180]`.
///
/// Returns `None` when the bounds are unmeasured, the pointer is not finite,
/// or the pointer sits exactly on the centre (no direction to read).
#[must_use]
pub fn pointer_to_game_angle(pointer: Point, bounds: &DialBounds) -> Option<f64> {
    if !bounds.is_measured() || !pointer.x.is_finite() || !pointer.y.is_finite() {
        return None;
    }
    let center = bounds.center();
    let dx = pointer.x - center.x;
    let dy = pointer.y - center.y;
    if dx.abs() < f64::EPSILON && dy.abs() < f64::EPSILON {
        return None;
    }
    Some(game_angle_from_screen_deg(dy.atan2(dx).to_degrees()))
}

/// Map an `atan2` screen angle in `[-180, 180]` onto the semicircle.
///
/// The upper half-plane maps linearly (`-180 → 0`, `-90 → 90`, `0 → 180`).
/// Angles below the flat edge snap to the nearer end: bottom-left to 0,
/// bottom-right to 180. Straight down counts as bottom-right.
#[must_use]
pub fn game_angle_from_screen_deg(screen_deg: f64) -> f64 {
    if screen_deg <= 0.0 {
        (screen_deg + 180.0).clamp(GAME_ANGLE_MIN, GAME_ANGLE_MAX)
    } else if screen_deg > 90.0 {
        GAME_ANGLE_MIN
    } else {
        GAME_ANGLE_MAX
    }
}

/// Validate a guess angle: `None` for non-finite input, otherwise clamped.
#[must_use]
pub fn clamp_game_angle(angle: f64) -> Option<f64> {
    angle
        .is_finite()
        .then(|| angle.clamp(GAME_ANGLE_MIN, GAME_ANGLE_MAX))
}

/// Next value of the spin accumulator for a new target.
///
/// The result is always at least [`MIN_SPIN_DEG`] past `current`, so the
/// wedge turns forward through seven or more full turns, and is congruent
/// mod 360 to `target - 90` so the wedge comes to rest centred on the target.
/// A non-finite accumulator restarts from zero; a non-finite target spins to
/// the centre.
#[must_use]
pub fn next_display_rotation(current: f64, target_deg: f64) -> f64 {
    let current = if current.is_finite() { current } else { 0.0 };
    let target_deg = if target_deg.is_finite() { target_deg } else { GAME_ANGLE_CENTER };

    let resting = target_deg - GAME_ANGLE_CENTER;
    let mut delta = resting - current.rem_euclid(360.0);
    let turns = ((MIN_SPIN_DEG - delta) / 360.0).ceil().max(0.0);
    delta += turns * 360.0;
    current + delta
}

/// CSS rotation for the needle pointing at `guess_deg`.
#[must_use]
pub fn needle_rotation_deg(guess_deg: f64) -> f64 {
    guess_deg - GAME_ANGLE_CENTER
}

/// View-box point at `radius` from the centre along game angle `angle_deg`.
#[must_use]
pub fn polar_point(angle_deg: f64, radius: f64) -> Point {
    let radians = (180.0 + angle_deg).to_radians();
    Point {
        x: DIAL_CENTER_X + radius * radians.cos(),
        y: DIAL_CENTER_Y + radius * radians.sin(),
    }
}
