//! Status banner telling the psychic or the team what to do next.

use leptos::prelude::*;

use crate::state::game::{GameView, status_text};

#[component]
pub fn GameStatus(#[prop(into)] state: Signal<GameView>) -> impl IntoView {
    let status = Memo::new(move |_| status_text(&state.get()));

    view! {
        <div class=move || status.get().tone.class()>
            <span class="game-status__title">{move || status.get().title}</span>
            {move || {
                status
                    .get()
                    .detail
                    .map(|detail| view! { <span class="game-status__detail">{detail}</span> })
            }}
            {move || {
                status
                    .get()
                    .hint
                    .map(|hint| view! { <span class="game-status__hint">{hint}</span> })
            }}
        </div>
    }
}
