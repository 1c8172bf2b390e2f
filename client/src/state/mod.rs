//! Reactive view state.
//!
//! DESIGN
//! ======
//! The browser host owns a [`session::GameSession`]; components only ever see
//! the [`game::GameView`] snapshot published after each transition.

pub mod game;
pub mod session;
