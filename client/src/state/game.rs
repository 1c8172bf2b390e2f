//! Snapshot of the game for rendering, plus the status banner copy.

#[cfg(test)]
#[path = "game_test.rs"]
mod game_test;

use dial::bands::Score;
use dial::card::ConceptCard;
use dial::engine::Game;
use dial::phase::GamePhase;
use dial::render::{self, ScoreLabel, SPIN_TRANSITION};
use dial::theme::CardTheme;

/// Everything the components read, copied out of the engine after each
/// transition.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameView {
    pub phase: GamePhase,
    pub card: Option<ConceptCard>,
    pub theme: CardTheme,
    pub target: Option<f64>,
    pub guess: f64,
    pub score: Option<Score>,
    pub spinning: bool,
    pub display_rotation: f64,
    /// A needle drag is in progress.
    pub dragging: bool,
}

impl GameView {
    #[must_use]
    pub fn from_game(game: &Game, dragging: bool) -> Self {
        Self {
            phase: game.phase(),
            card: game.card().cloned(),
            theme: game.theme(),
            target: game.target(),
            guess: game.guess(),
            score: game.score(),
            spinning: game.is_spinning(),
            display_rotation: game.display_rotation(),
            dragging,
        }
    }

    /// Inline style for the rotating wedge group.
    #[must_use]
    pub fn wedge_style(&self) -> String {
        let transition = if self.spinning { SPIN_TRANSITION } else { "none" };
        format!(
            "transform-origin: {}; transform: {}; transition: {transition};",
            render::pivot_origin(),
            render::rotate(self.display_rotation)
        )
    }

    /// Inline style for the needle group. Easing is disabled mid-drag so the
    /// needle tracks the pointer.
    #[must_use]
    pub fn needle_style(&self) -> String {
        let cursor = if self.phase.accepts_drag() { "grab" } else { "default" };
        format!(
            "transform-origin: {}; transform: {}; cursor: {cursor};",
            render::pivot_origin(),
            render::needle_transform(self.guess)
        )
    }

    /// Inline style for the cover screen.
    #[must_use]
    pub fn cover_style(&self) -> String {
        let opacity = if self.phase.covers_target() { 1 } else { 0 };
        format!("transform-origin: {}; opacity: {opacity};", render::pivot_origin())
    }

    /// Score numbers to draw, if the phase shows them.
    #[must_use]
    pub fn score_labels(&self) -> Vec<ScoreLabel> {
        match self.target {
            Some(target) if self.phase.shows_score_labels() => render::score_labels(target),
            _ => Vec::new(),
        }
    }
}

// =============================================================================
// STATUS BANNER
// =============================================================================

/// Who the banner is talking to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Psychic,
    Team,
    Result,
    Loading,
}

impl StatusTone {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Psychic => "game-status game-status--psychic",
            Self::Team => "game-status game-status--team",
            Self::Result => "game-status game-status--result",
            Self::Loading => "game-status game-status--loading",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusText {
    pub tone: StatusTone,
    pub title: String,
    pub detail: Option<String>,
    pub hint: Option<&'static str>,
}

impl StatusText {
    fn new(tone: StatusTone, title: impl Into<String>, detail: Option<String>) -> Self {
        Self { tone, title: title.into(), detail, hint: None }
    }
}

/// Banner copy for the current phase.
#[must_use]
pub fn status_text(view: &GameView) -> StatusText {
    if view.spinning {
        return StatusText::new(StatusTone::Team, "Time", Some("Sintonizando frequência...".into()));
    }
    match view.phase {
        GamePhase::SetupTarget => StatusText::new(StatusTone::Psychic, "Psíquico", Some("Toque para girar!".into())),
        GamePhase::ViewTarget => {
            StatusText::new(StatusTone::Psychic, "Psíquico", Some("Memorize! Toque para esconder.".into()))
        }
        GamePhase::Guessing => {
            StatusText::new(StatusTone::Team, "Time", Some("Ajustem o ponteiro. Toque para revelar.".into()))
        }
        GamePhase::Reveal => {
            let score = view.score.unwrap_or(Score::MISS);
            StatusText {
                tone: StatusTone::Result,
                title: format!("{} Pontos", score.points),
                detail: Some(score.message.to_owned()),
                hint: Some("Toque para próxima carta"),
            }
        }
        GamePhase::LoadingCard => StatusText::new(StatusTone::Loading, "Carregando...", None),
    }
}
