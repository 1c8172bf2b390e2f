//! Two-sided concept card, or a placeholder while the first batch loads.
//!
//! The card only re-renders when the pair or its colours change, so the
//! fade-in plays once per card rather than on every needle move.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use dial::card::ConceptCard;
use dial::theme::CardTheme;

use crate::state::game::GameView;

#[component]
pub fn ConceptCardPanel(#[prop(into)] state: Signal<GameView>) -> impl IntoView {
    let current = Memo::new(move |_| {
        let view = state.get();
        view.card.map(|card| (card, view.theme))
    });

    move || match current.get() {
        None => view! {
            <div class="concept-card concept-card--loading">
                <span>"Carregando conceitos..."</span>
            </div>
        }
        .into_any(),
        Some((card, theme)) => card_view(card, theme).into_any(),
    }
}

fn card_view(card: ConceptCard, theme: CardTheme) -> impl IntoView {
    view! {
        <div class="concept-card concept-card--enter">
            <div class="concept-card__side" style=format!("background-color: {};", theme.left)>
                <span class="concept-card__text">{card.left}</span>
            </div>
            <div class="concept-card__side" style=format!("background-color: {};", theme.right)>
                <span class="concept-card__text">{card.right}</span>
            </div>
        </div>
    }
}
