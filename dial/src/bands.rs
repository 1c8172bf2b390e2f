//! Scoring bands around the target.
//!
//! [`BANDS`] is the one table both the score computation and the wedge
//! graphic read from. Half-widths grow from the centre band outwards, so the
//! first band whose half-width contains the distance wins and boundary values
//! land in the higher tier.

#[cfg(test)]
#[path = "bands_test.rs"]
mod bands_test;

/// One concentric band of the target wedge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBand {
    pub points: u8,
    /// Degrees either side of the target covered by this band.
    pub half_width_deg: f64,
    pub message: &'static str,
}

/// Centre, middle and outer bands, innermost first.
pub const BANDS: [ScoreBand; 3] = [
    ScoreBand { points: 4, half_width_deg: 4.0, message: "TRANSMISSÃO DE PENSAMENTO!" },
    ScoreBand { points: 3, half_width_deg: 11.0, message: "SINTONIA FINA!" },
    ScoreBand { points: 2, half_width_deg: 18.0, message: "NA MESMA FREQUÊNCIA" },
];

pub const MISS_MESSAGE: &str = "FORA DE SINTONIA...";

/// Points and message awarded at reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub points: u8,
    pub message: &'static str,
}

impl Score {
    pub const MISS: Self = Self { points: 0, message: MISS_MESSAGE };
}

/// Half-widths of the centre, middle and outer bands, in degrees.
#[must_use]
pub fn wedge_boundaries() -> [f64; 3] {
    BANDS.map(|band| band.half_width_deg)
}

/// Score for an absolute angular distance between target and guess.
#[must_use]
pub fn score_for_distance(distance_deg: f64) -> Score {
    BANDS
        .iter()
        .find(|band| distance_deg <= band.half_width_deg)
        .map_or(Score::MISS, |band| Score { points: band.points, message: band.message })
}

/// Score a guess against the target.
#[must_use]
pub fn score(target_deg: f64, guess_deg: f64) -> Score {
    score_for_distance((target_deg - guess_deg).abs())
}

/// Where each band's point value is printed, as offsets from the target.
///
/// The centre band is labelled on the target itself; every other band gets a
/// label on each side, halfway between its inner and outer edge.
#[must_use]
pub fn label_offsets() -> Vec<(u8, f64)> {
    let mut out = Vec::with_capacity(BANDS.len() * 2 - 1);
    let mut inner = 0.0;
    for (i, band) in BANDS.iter().enumerate() {
        if i == 0 {
            out.push((band.points, 0.0));
        } else {
            let mid = (inner + band.half_width_deg) / 2.0;
            out.push((band.points, -mid));
            out.push((band.points, mid));
        }
        inner = band.half_width_deg;
    }
    out
}
