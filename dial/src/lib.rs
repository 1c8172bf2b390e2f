//! Game engine for the Sintonia dial party game.
//!
//! This crate holds everything that does not need a browser: the round phase
//! machine, the dial's polar geometry, scoring bands, the concept card pool,
//! and the SVG path data the UI draws. The host (the Leptos `client` crate)
//! forwards taps, drags, timer completions and fetch results to
//! [`engine::Game`] and performs the [`engine::Effect`]s it returns.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | The [`engine::Game`] phase controller and its effects |
//! | [`phase`] | The closed [`phase::GamePhase`] enumeration |
//! | [`geometry`] | Pointer to game-angle mapping and spin rotation |
//! | [`bands`] | Scoring bands shared by scoring and rendering |
//! | [`render`] | SVG path and label data for the dial graphic |
//! | [`card`] | Concept cards and provider response validation |
//! | [`pool`] | No-repeat card pool |
//! | [`fallback`] | Offline concept list |
//! | [`theme`] | Card colour themes |
//! | [`schedule`] | Timer tokens and fetch tickets |
//! | [`input`] | Drag vs. tap disambiguation |
//! | [`config`] | Tunable timings and thresholds |
//! | [`consts`] | Shared numeric constants (view box, target range, spin) |

pub mod bands;
pub mod card;
pub mod config;
pub mod consts;
pub mod engine;
pub mod fallback;
pub mod geometry;
pub mod input;
pub mod phase;
pub mod pool;
pub mod render;
pub mod schedule;
pub mod theme;
