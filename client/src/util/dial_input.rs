//! Browser helpers for the dial page: pointer coordinates, element bounds,
//! the clock and the session seed.

#[cfg(test)]
#[path = "dial_input_test.rs"]
mod dial_input_test;

#[cfg(feature = "hydrate")]
use dial::geometry::{DialBounds, Point};

/// Pointer position in client (viewport) coordinates.
#[cfg(feature = "hydrate")]
pub fn client_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// Bounding box of the dial element in client coordinates.
#[cfg(feature = "hydrate")]
pub fn element_bounds(el: &web_sys::Element) -> DialBounds {
    let rect = el.get_bounding_client_rect();
    DialBounds::new(rect.left(), rect.top(), rect.width(), rect.height())
}

#[cfg(feature = "hydrate")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Per-page-load RNG seed.
#[cfg(feature = "hydrate")]
pub fn session_seed() -> u64 {
    mix_seed(js_sys::Math::random(), js_sys::Date::now())
}

/// Fold two floating-point entropy sources into one 64-bit seed.
///
/// Bit patterns pass through a splitmix64 finaliser.
#[must_use]
pub fn mix_seed(entropy: f64, now_ms: f64) -> u64 {
    let mut z = entropy.to_bits() ^ now_ms.to_bits().rotate_left(32);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
