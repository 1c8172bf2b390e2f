//! Anthropic Messages API client.
//!
//! Thin HTTP wrapper for `/v1/messages`. Pure parsing in `parse_response`
//! for testability.

use std::time::Duration;

use super::config::LlmTimeouts;
use super::types::{ChatResponse, LlmError, Message, StopReason, TokenUsage};

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";

// =============================================================================
// CLIENT
// =============================================================================

pub struct AnthropicClient {
    http: reqwest::Client,
    api_key: String,
}

impl AnthropicClient {
    /// # Errors
    ///
    /// Returns [`LlmError::HttpClientBuild`] if the reqwest client fails to build.
    pub fn new(api_key: String, timeouts: LlmTimeouts) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key })
    }

    /// # Errors
    ///
    /// Returns an [`LlmError`] on transport failure, non-200 status or an
    /// unparseable body.
    pub async fn chat(
        &self,
        model: &str,
        max_tokens: u32,
        system: &str,
        messages: &[Message],
    ) -> Result<ChatResponse, LlmError> {
        let body = ApiRequest { model, max_tokens, system, messages };
        let response = self
            .http
            .post(API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| LlmError::ApiRequest(e.to_string()))?;
        tracing::debug!(status, bytes = text.len(), model, "anthropic reply");
        if status != 200 {
            return Err(LlmError::ApiResponse { status, body: text });
        }
        parse_response(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: &'a [Message],
}

#[derive(serde::Deserialize)]
struct ApiResponse {
    content: Vec<ApiBlock>,
    model: String,
    stop_reason: Option<String>,
    usage: ApiUsage,
}

/// Response content block. Only text matters for concept generation.
#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ApiBlock {
    Text { text: String },
    #[serde(other)]
    Other,
}

#[derive(serde::Deserialize)]
struct ApiUsage {
    input_tokens: u64,
    output_tokens: u64,
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_response(json: &str) -> Result<ChatResponse, LlmError> {
    let api: ApiResponse = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;

    let text = api
        .content
        .into_iter()
        .filter_map(|block| match block {
            ApiBlock::Text { text } => Some(text),
            ApiBlock::Other => None,
        })
        .collect();
    let stop = match api.stop_reason.as_deref() {
        Some("max_tokens") => StopReason::MaxTokens,
        _ => StopReason::EndTurn,
    };

    Ok(ChatResponse {
        text,
        model: api.model,
        stop,
        usage: TokenUsage { input: api.usage.input_tokens, output: api.usage.output_tokens },
    })
}

#[cfg(test)]
#[path = "anthropic_test.rs"]
mod tests;
