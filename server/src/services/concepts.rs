//! Concept service: asks the LLM for a batch of opposite-concept pairs.
//!
//! DESIGN
//! ======
//! One prompt, one completion, no tools. The model is told to answer with a
//! bare JSON array; the reply text is stripped of any markdown code fence
//! and handed to `dial::card::parse_batch`, so the server and the browser
//! share one definition of a valid card.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as a [`ConceptError`]. The route maps them to
//! HTTP statuses; the client treats all of them alike and plays with the
//! fallback list.

use dial::card::{CardError, ConceptCard, parse_batch};
use tracing::{info, warn};

use crate::error::ErrorCode;
use crate::llm::LlmChat;
use crate::llm::types::{ChatResponse, LlmError, Message};

pub const SYSTEM_PROMPT: &str = "Você cria cartas para o jogo de festa 'Sintonia' (Wavelength). \
Cada carta é um espectro entre dois conceitos opostos. \
Responda somente com JSON válido, sem comentários nem markdown.";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConceptError {
    #[error("LLM not configured")]
    LlmNotConfigured,
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
    #[error("invalid concept batch: {0}")]
    InvalidBatch(#[from] CardError),
    #[error("LLM returned no concept pairs")]
    EmptyBatch,
}

impl ErrorCode for ConceptError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::LlmNotConfigured => "E_LLM_NOT_CONFIGURED",
            Self::Llm(_) => "E_LLM_ERROR",
            Self::InvalidBatch(_) => "E_INVALID_BATCH",
            Self::EmptyBatch => "E_EMPTY_BATCH",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Llm(e) if e.retryable())
    }
}

// =============================================================================
// PROMPT
// =============================================================================

/// User prompt asking for `count` pairs.
#[must_use]
pub fn build_prompt(count: usize) -> String {
    format!(
        "Gere {count} pares de conceitos opostos criativos e divertidos para o jogo 'Sintonia' (Wavelength) em Português. \
         Os conceitos devem ser um espectro (ex: Quente / Frio, Herói / Vilão, Inútil / Útil). \
         Retorne apenas JSON: um array de objetos no formato {{\"left\": \"...\", \"right\": \"...\"}}."
    )
}

/// Remove a surrounding markdown code fence (```json ... ```), if any.
#[must_use]
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    body.trim_end()
        .strip_suffix("```")
        .unwrap_or(body)
        .trim()
}

/// Text of the completion with any code fence removed.
#[must_use]
pub fn extract_text(response: &ChatResponse) -> String {
    strip_code_fence(&response.text).to_string()
}

// =============================================================================
// GENERATION
// =============================================================================

/// Ask `llm` for `count` concept pairs and validate the reply.
///
/// A reply with more pairs than requested is kept whole.
///
/// # Errors
///
/// [`ConceptError::Llm`] when the provider call fails,
/// [`ConceptError::InvalidBatch`] when the reply is not a card list, and
/// [`ConceptError::EmptyBatch`] when it is an empty one.
pub async fn generate_concepts(
    llm: &dyn LlmChat,
    count: usize,
    max_tokens: u32,
) -> Result<Vec<ConceptCard>, ConceptError> {
    let messages = [Message::user(build_prompt(count))];
    let response = llm.chat(max_tokens, SYSTEM_PROMPT, &messages).await?;

    info!(
        model = %response.model,
        stop_reason = response.stop.as_str(),
        input_tokens = response.usage.input,
        output_tokens = response.usage.output,
        "concept batch generated"
    );

    let text = extract_text(&response);
    let cards = match parse_batch(&text) {
        Ok(cards) => cards,
        Err(e) => {
            warn!(error = %e, truncated = response.stop.is_truncated(), "concept batch rejected");
            return Err(e.into());
        }
    };
    if cards.is_empty() {
        return Err(ConceptError::EmptyBatch);
    }

    info!(count = cards.len(), requested = count, "concept batch validated");
    Ok(cards)
}

#[cfg(test)]
#[path = "concepts_test.rs"]
mod tests;
