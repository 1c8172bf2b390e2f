//! Concept batch route.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use dial::card::ConceptCard;
use serde::Serialize;
use tracing::warn;

use crate::error::{ErrorCode, error_body};
use crate::services::concepts::{self, ConceptError};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ConceptBatchResponse {
    pub cards: Vec<ConceptCard>,
}

pub(crate) fn concept_error_to_status(err: &ConceptError) -> StatusCode {
    match err {
        ConceptError::LlmNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        ConceptError::Llm(_) | ConceptError::InvalidBatch(_) | ConceptError::EmptyBatch => StatusCode::BAD_GATEWAY,
    }
}

/// `GET /api/concepts`: a fresh batch of concept pairs from the LLM.
pub async fn get_concepts(State(state): State<AppState>) -> Response {
    let result = match state.llm.as_deref() {
        Some(llm) => {
            concepts::generate_concepts(llm, state.config.concept_batch_size, state.config.concept_max_tokens).await
        }
        None => Err(ConceptError::LlmNotConfigured),
    };

    match result {
        Ok(cards) => Json(ConceptBatchResponse { cards }).into_response(),
        Err(e) => {
            warn!(error = %e, code = e.error_code(), "concept batch unavailable");
            (concept_error_to_status(&e), Json(error_body(&e))).into_response()
        }
    }
}

#[cfg(test)]
#[path = "concepts_test.rs"]
mod tests;
