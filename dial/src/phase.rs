//! Round phases.

#[cfg(test)]
#[path = "phase_test.rs"]
mod phase_test;

/// The single active phase of the current round.
///
/// Cycles `LoadingCard → SetupTarget → ViewTarget → Guessing → Reveal` and
/// back to `LoadingCard` for the next card. Spinning is a flag layered on
/// `SetupTarget`, not a phase of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Waiting for a card to be drawn (or for a batch to arrive).
    #[default]
    LoadingCard,
    /// The psychic taps to spin the target.
    SetupTarget,
    /// The target is visible to the psychic.
    ViewTarget,
    /// Target hidden; the group drags the needle.
    Guessing,
    /// Target and score shown.
    Reveal,
}

impl GamePhase {
    /// Whether the screen is drawn over the target wedge.
    #[must_use]
    pub fn covers_target(self) -> bool {
        self == Self::Guessing
    }

    /// Whether the score numbers are drawn over the wedge.
    #[must_use]
    pub fn shows_score_labels(self) -> bool {
        matches!(self, Self::ViewTarget | Self::Reveal)
    }

    /// Whether the needle accepts drag input.
    #[must_use]
    pub fn accepts_drag(self) -> bool {
        self == Self::Guessing
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LoadingCard => "loading_card",
            Self::SetupTarget => "setup_target",
            Self::ViewTarget => "view_target",
            Self::Guessing => "guessing",
            Self::Reveal => "reveal",
        }
    }
}
