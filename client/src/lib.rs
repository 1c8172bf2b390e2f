//! # client
//!
//! Leptos + WASM frontend for the Sintonia dial game.
//!
//! The game rules live in the `dial` crate; this crate renders them, feeds
//! pointer input and timer/fetch completions back into `dial::engine::Game`,
//! and performs the effects it asks for. The server renders the shell with
//! the `ssr` feature; the browser hydrates it with `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point called by the hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger already set: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
