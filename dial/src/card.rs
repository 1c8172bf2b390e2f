//! Concept cards and validation of provider batches.
//!
//! A provider answers with either a bare JSON array of `{left, right}` objects
//! or an object wrapping that array under `"cards"`. A batch is accepted whole
//! or rejected whole: one malformed entry fails the batch so the caller can
//! fall back instead of playing with a partial list.

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One pair of opposing concepts at the two ends of the dial.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConceptCard {
    pub left: String,
    pub right: String,
}

impl ConceptCard {
    /// Build a card, trimming both sides. Blank sides are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::BlankSide`] when either side is empty after
    /// trimming.
    pub fn new(left: &str, right: &str) -> Result<Self, CardError> {
        let left = left.trim();
        let right = right.trim();
        if left.is_empty() {
            return Err(CardError::BlankSide { side: "left" });
        }
        if right.is_empty() {
            return Err(CardError::BlankSide { side: "right" });
        }
        Ok(Self { left: left.to_owned(), right: right.to_owned() })
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CardError {
    #[error("batch is not valid JSON: {0}")]
    Json(String),
    #[error("batch must be an array or an object with a `cards` array")]
    NotAnArray,
    #[error("entry {index} must be an object")]
    EntryNotObject { index: usize },
    #[error("entry {index} is missing string field `{field}`")]
    MissingField { index: usize, field: &'static str },
    #[error("card {side} side is blank")]
    BlankSide { side: &'static str },
    #[error("entry {index}: {source}")]
    Entry { index: usize, source: Box<CardError> },
}

/// Parse and validate a provider response body.
///
/// # Errors
///
/// Returns a [`CardError`] describing the first problem found.
pub fn parse_batch(body: &str) -> Result<Vec<ConceptCard>, CardError> {
    let value: Value = serde_json::from_str(body.trim()).map_err(|e| CardError::Json(e.to_string()))?;
    validate_batch(&value)
}

/// Validate an already-parsed provider response.
///
/// # Errors
///
/// Returns a [`CardError`] describing the first problem found.
pub fn validate_batch(value: &Value) -> Result<Vec<ConceptCard>, CardError> {
    let entries = match value {
        Value::Array(items) => items,
        Value::Object(map) => match map.get("cards") {
            Some(Value::Array(items)) => items,
            _ => return Err(CardError::NotAnArray),
        },
        _ => return Err(CardError::NotAnArray),
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| validate_entry(index, entry))
        .collect()
}

fn validate_entry(index: usize, entry: &Value) -> Result<ConceptCard, CardError> {
    let obj = entry.as_object().ok_or(CardError::EntryNotObject { index })?;
    let side = |field: &'static str| {
        obj.get(field)
            .and_then(Value::as_str)
            .ok_or(CardError::MissingField { index, field })
    };
    let left = side("left")?;
    let right = side("right")?;
    ConceptCard::new(left, right).map_err(|e| CardError::Entry { index, source: Box::new(e) })
}
