//! Header with the "Reiniciar" control.

use leptos::prelude::*;

/// Restart control. The click never reaches the page's tap handler.
#[component]
pub fn RestartButton<F>(on_restart: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <header class="restart">
            <button
                class="restart__button"
                type="button"
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.stop_propagation();
                    on_restart();
                }
            >
                <span class="restart__icon" aria-hidden="true">"↻"</span>
                <span>"Reiniciar"</span>
            </button>
        </header>
    }
}
