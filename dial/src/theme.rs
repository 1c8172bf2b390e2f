//! Card colour themes.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use rand::Rng;

/// Background colours for the left and right halves of the concept card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardTheme {
    pub left: &'static str,
    pub right: &'static str,
}

pub const CARD_THEMES: [CardTheme; 6] = [
    CardTheme { left: "#009CDF", right: "#F1C6DA" },
    CardTheme { left: "#F36B26", right: "#F0F0F0" },
    CardTheme { left: "#009B6B", right: "#E8C5D9" },
    CardTheme { left: "#8286A2", right: "#96D6E5" },
    CardTheme { left: "#009FE3", right: "#B3DDE9" },
    CardTheme { left: "#EBBED5", right: "#7AC1D9" },
];

impl Default for CardTheme {
    fn default() -> Self {
        CARD_THEMES[0]
    }
}

impl CardTheme {
    /// A uniformly random theme.
    pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> Self {
        CARD_THEMES[rng.random_range(0..CARD_THEMES.len())]
    }
}
