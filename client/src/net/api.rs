//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as `Err(String)`. The engine treats any error as a
//! signal to play with the built-in fallback list, so the message is only
//! ever logged.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use dial::card::ConceptCard;
#[cfg(any(test, feature = "hydrate"))]
use serde::Deserialize;

pub const CONCEPTS_ENDPOINT: &str = "/api/concepts";

#[cfg(any(test, feature = "hydrate"))]
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Deserialize)]
struct ErrorDetail {
    code: String,
    #[serde(default)]
    message: String,
}

#[cfg(any(test, feature = "hydrate"))]
fn concept_request_failed_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) if envelope.error.message.is_empty() => {
            format!("concept request failed: {status} {}", envelope.error.code)
        }
        Ok(envelope) => format!(
            "concept request failed: {status} {}: {}",
            envelope.error.code, envelope.error.message
        ),
        Err(_) => format!("concept request failed: {status}"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_concepts_body(body: &str) -> Result<Vec<ConceptCard>, String> {
    dial::card::parse_batch(body).map_err(|e| format!("concept batch rejected: {e}"))
}

/// Fetch a batch of concept cards from `/api/concepts`.
///
/// # Errors
///
/// Returns a message on transport failure, a non-2xx status, or a body that
/// is not a valid card batch.
pub async fn fetch_concepts() -> Result<Vec<ConceptCard>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CONCEPTS_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(concept_request_failed_message(status, &body));
        }
        parse_concepts_body(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
