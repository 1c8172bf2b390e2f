//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the one REST call the game makes: fetching a batch of
//! concept cards from the server.

pub mod api;
