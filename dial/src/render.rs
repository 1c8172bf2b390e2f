//! SVG data for the dial graphic.
//!
//! DESIGN
//! ======
//! Everything is expressed in the fixed 300×170 view box. The target wedge is
//! drawn centred on 90° (straight up) and turned into place by a CSS rotation
//! of the whole group, which is what lets the spin animate. The wedge sector
//! widths come from [`BANDS`], the same table scoring reads, so what the
//! players see is exactly what scores.
//!
//! Coordinates are formatted with two decimals; the browser does not need
//! more and it keeps the markup stable for tests.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::bands::{BANDS, label_offsets};
use crate::consts::{DIAL_CENTER_X, DIAL_CENTER_Y, DIAL_RADIUS, GAME_ANGLE_CENTER, GAME_ANGLE_MAX, GAME_ANGLE_MIN};
use crate::geometry::{needle_rotation_deg, polar_point};

// =============================================================================
// PALETTE
// =============================================================================

pub const FACE_FILL: &str = "#f8ede0";
pub const FACE_STROKE: &str = "#d1ccc0";
pub const COVER_FILL: &str = "#90cbb7";
pub const NEEDLE_FILL: &str = "#c0392b";
pub const EDGE_STROKE: &str = "#bdc3c7";
pub const LABEL_FILL: &str = "#fff";

/// Wedge colours, innermost band first.
pub const WEDGE_FILLS: [&str; 3] = ["#e74c3c", "#3498db", "#e67e22"];

/// CSS transition applied to the wedge group while spinning.
pub const SPIN_TRANSITION: &str = "transform 3s cubic-bezier(0.65, 0, 0.15, 1)";

const COVER_OVERHANG: f64 = 2.0;
const LABEL_INSET: f64 = 12.0;
const EDGE_OVERHANG: f64 = 10.0;

// =============================================================================
// PATHS
// =============================================================================

fn num(v: f64) -> String {
    let s = format!("{v:.2}");
    if s == "-0.00" { "0.00".to_owned() } else { s }
}

/// Closed pie slice from `start_deg` to `end_deg` (game angles), both clamped
/// to the semicircle.
#[must_use]
pub fn sector_path(start_deg: f64, end_deg: f64, radius: f64) -> String {
    let start = polar_point(start_deg.clamp(GAME_ANGLE_MIN, GAME_ANGLE_MAX), radius);
    let end = polar_point(end_deg.clamp(GAME_ANGLE_MIN, GAME_ANGLE_MAX), radius);
    format!(
        "M {cx} {cy} L {sx} {sy} A {r} {r} 0 0 1 {ex} {ey} Z",
        cx = num(DIAL_CENTER_X),
        cy = num(DIAL_CENTER_Y),
        sx = num(start.x),
        sy = num(start.y),
        r = num(radius),
        ex = num(end.x),
        ey = num(end.y),
    )
}

/// Background semicircle; also used as the wedge clip mask.
#[must_use]
pub fn face_path() -> String {
    sector_path(GAME_ANGLE_MIN, GAME_ANGLE_MAX, DIAL_RADIUS)
}

/// The screen that hides the wedge while the group guesses.
#[must_use]
pub fn cover_path() -> String {
    sector_path(GAME_ANGLE_MIN, GAME_ANGLE_MAX, DIAL_RADIUS + COVER_OVERHANG)
}

/// Horizontal line along the dial's flat edge.
#[must_use]
pub fn edge_path() -> String {
    let y = num(DIAL_CENTER_Y);
    format!(
        "M {} {y} L {} {y}",
        num(DIAL_CENTER_X - DIAL_RADIUS - EDGE_OVERHANG),
        num(DIAL_CENTER_X + DIAL_RADIUS + EDGE_OVERHANG),
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct WedgeSector {
    pub points: u8,
    pub fill: &'static str,
    pub path: String,
}

/// Wedge sectors in paint order: outermost band first so inner bands sit on
/// top.
#[must_use]
pub fn wedge_sectors() -> Vec<WedgeSector> {
    BANDS
        .iter()
        .zip(WEDGE_FILLS)
        .rev()
        .map(|(band, fill)| WedgeSector {
            points: band.points,
            fill,
            path: sector_path(
                GAME_ANGLE_CENTER - band.half_width_deg,
                GAME_ANGLE_CENTER + band.half_width_deg,
                DIAL_RADIUS,
            ),
        })
        .collect()
}

// =============================================================================
// LABELS & TRANSFORMS
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Point values printed over the wedge, positioned around `target_deg`.
#[must_use]
pub fn score_labels(target_deg: f64) -> Vec<ScoreLabel> {
    label_offsets()
        .into_iter()
        .map(|(points, offset)| {
            let p = polar_point(target_deg + offset, DIAL_RADIUS - LABEL_INSET);
            ScoreLabel { text: points.to_string(), x: p.x, y: p.y }
        })
        .collect()
}

/// `rotate(..)` CSS transform value.
#[must_use]
pub fn rotate(deg: f64) -> String {
    format!("rotate({}deg)", num(deg))
}

#[must_use]
pub fn needle_transform(guess_deg: f64) -> String {
    rotate(needle_rotation_deg(guess_deg))
}

/// `transform-origin` placing the pivot at the dial centre.
#[must_use]
pub fn pivot_origin() -> String {
    format!("{DIAL_CENTER_X}px {DIAL_CENTER_Y}px")
}
