//! Grepable error codes shared by service and provider errors.
//!
//! Every error that can reach an HTTP response implements [`ErrorCode`], so
//! handlers can render a stable `E_*` code next to the human message.

use serde_json::{Value, json};

/// Grepable error code and retryable flag for structured error bodies.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

/// `{"error": {"code", "message", "retryable"}}` body for an error.
pub fn error_body<E: ErrorCode + ?Sized>(err: &E) -> Value {
    json!({
        "error": {
            "code": err.error_code(),
            "message": err.to_string(),
            "retryable": err.retryable(),
        }
    })
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
