//! OpenAI-compatible API client.
//!
//! Supports both `/v1/chat/completions` and `/v1/responses` endpoints for
//! plain text generation.

use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use super::config::{LlmTimeouts, OpenAiApiMode};
use super::types::{ChatResponse, LlmError, Message, StopReason, TokenUsage};

pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    mode: OpenAiApiMode,
}

impl OpenAiClient {
    /// # Errors
    ///
    /// Returns [`LlmError::HttpClientBuild`] if the reqwest client fails to build.
    pub fn new(api_key: String, mode: OpenAiApiMode, base_url: String, timeouts: LlmTimeouts) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        let base_url = base_url.trim_end_matches('/').to_string();
        Ok(Self { http, api_key, base_url, mode })
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
        match self.mode {
            OpenAiApiMode::ChatCompletions => {
                let msgs = build_chat_completions_messages(system, messages);
                let body = CcRequest { model, max_tokens, messages: &msgs };
                let text = self.send_json("/chat/completions", &body).await?;
                parse_chat_completions_response(&text)
            }
            OpenAiApiMode::Responses => {
                let input = build_responses_input(messages);
                let body = RespRequest { model, max_output_tokens: max_tokens, instructions: system, input: &input };
                let text = self.send_json("/responses", &body).await?;
                parse_responses_response(&text)
            }
        }
    }

    async fn send_json(&self, path: &str, body: &impl Serialize) -> Result<String, LlmError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| LlmError::ApiRequest(e.to_string()))?;
        tracing::debug!(status, bytes = text.len(), path, "openai reply");
        if status != 200 {
            return Err(LlmError::ApiResponse { status, body: text });
        }
        Ok(text)
    }
}

// =============================================================================
// CHAT COMPLETIONS
// =============================================================================

#[derive(Serialize)]
struct CcRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: &'a [CcMessage],
}

#[derive(Debug, Serialize)]
struct CcMessage {
    role: &'static str,
    content: String,
}

fn build_chat_completions_messages(system: &str, messages: &[Message]) -> Vec<CcMessage> {
    let mut out = Vec::with_capacity(messages.len() + 1);
    if !system.trim().is_empty() {
        out.push(CcMessage { role: "system", content: system.to_string() });
    }
    for message in messages.iter().filter(|m| !m.content.is_empty()) {
        out.push(CcMessage { role: message.role.as_str(), content: message.content.clone() });
    }
    out
}

pub(crate) fn parse_chat_completions_response(json_text: &str) -> Result<ChatResponse, LlmError> {
    let root: Value = serde_json::from_str(json_text).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    let model = root
        .get("model")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_default();
    let prompt_tokens = root
        .get("usage")
        .and_then(|u| u.get("prompt_tokens"))
        .and_then(Value::as_u64)
        .unwrap_or(0);
    let completion_tokens = root
        .get("usage")
        .and_then(|u| u.get("completion_tokens"))
        .and_then(Value::as_u64)
        .unwrap_or(0);

    let Some(choice) = root
        .get("choices")
        .and_then(Value::as_array)
        .and_then(|arr| arr.first())
    else {
        return Err(LlmError::ApiParse("chat_completions: missing choices[0]".to_string()));
    };
    let finish_reason = choice
        .get("finish_reason")
        .and_then(Value::as_str)
        .unwrap_or("stop");

    let text = choice
        .get("message")
        .and_then(|m| m.get("content"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let stop = if finish_reason == "length" { StopReason::MaxTokens } else { StopReason::EndTurn };

    Ok(ChatResponse { text, model, stop, usage: TokenUsage { input: prompt_tokens, output: completion_tokens } })
}

// =============================================================================
// RESPONSES
// =============================================================================

#[derive(Serialize)]
struct RespRequest<'a> {
    model: &'a str,
    max_output_tokens: u32,
    instructions: &'a str,
    input: &'a [RespInputItem],
}

#[derive(Debug, Serialize)]
struct RespInputItem {
    #[serde(rename = "type")]
    item_type: &'static str,
    role: &'static str,
    content: Vec<RespTextContent>,
}

#[derive(Debug, Serialize)]
struct RespTextContent {
    #[serde(rename = "type")]
    content_type: &'static str,
    text: String,
}

fn build_responses_input(messages: &[Message]) -> Vec<RespInputItem> {
    messages
        .iter()
        .filter(|message| !message.content.is_empty())
        .map(|message| RespInputItem {
            item_type: "message",
            role: message.role.as_str(),
            content: vec![RespTextContent { content_type: "input_text", text: message.content.clone() }],
        })
        .collect()
}

pub(crate) fn parse_responses_response(json_text: &str) -> Result<ChatResponse, LlmError> {
    let root: Value = serde_json::from_str(json_text).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    let model = root
        .get("model")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_default();
    let input_tokens = root
        .get("usage")
        .and_then(|u| u.get("input_tokens"))
        .and_then(Value::as_u64)
        .unwrap_or(0);
    let output_tokens = root
        .get("usage")
        .and_then(|u| u.get("output_tokens"))
        .and_then(Value::as_u64)
        .unwrap_or(0);

    let mut text = String::new();
    if let Some(items) = root.get("output").and_then(Value::as_array) {
        for item in items {
            if item.get("type").and_then(Value::as_str) != Some("message") {
                continue;
            }
            let Some(parts) = item.get("content").and_then(Value::as_array) else {
                continue;
            };
            for part in parts {
                let kind = part.get("type").and_then(Value::as_str);
                let part_text = part
                    .get("text")
                    .or_else(|| part.get("output_text"))
                    .and_then(Value::as_str)
                    .unwrap_or("");
                if matches!(kind, Some("output_text" | "text")) {
                    text.push_str(part_text);
                }
            }
        }
    } else if let Some(output_text) = root.get("output_text").and_then(Value::as_str) {
        text.push_str(output_text);
    }

    let truncated = root
        .get("incomplete_details")
        .and_then(|d| d.get("reason"))
        .and_then(Value::as_str)
        == Some("max_output_tokens");
    let stop = if truncated { StopReason::MaxTokens } else { StopReason::EndTurn };

    Ok(ChatResponse { text, model, stop, usage: TokenUsage { input: input_tokens, output: output_tokens } })
}

#[cfg(test)]
#[path = "openai_test.rs"]
mod tests;
