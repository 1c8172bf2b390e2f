//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! The game itself runs in the browser, so the server keeps no session
//! state: only the optional LLM client and the parsed server config.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::llm::LlmChat;

#[derive(Clone)]
pub struct AppState {
    /// `None` when the LLM block is not configured; `/api/concepts` then
    /// answers 503 and clients play with the fallback list.
    pub llm: Option<Arc<dyn LlmChat>>,
    pub config: ServerConfig,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn LlmChat>>, config: ServerConfig) -> Self {
        Self { llm, config }
    }
}
