//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the dial, the concept card and the status banner from
//! the shared `GameView` signal. Anything interactive takes its handlers as
//! props so the game page stays the only place that touches the engine.

pub mod concept_card;
pub mod dial;
pub mod game_status;
pub mod restart_button;
