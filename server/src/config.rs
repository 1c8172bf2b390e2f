//! Server configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CONCEPT_BATCH_SIZE: usize = 10;
pub const DEFAULT_CONCEPT_MAX_TOKENS: u32 = 1024;

/// Largest batch a single request may ask the LLM for.
pub const MAX_CONCEPT_BATCH_SIZE: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub concept_batch_size: usize,
    pub concept_max_tokens: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            concept_batch_size: DEFAULT_CONCEPT_BATCH_SIZE,
            concept_max_tokens: DEFAULT_CONCEPT_MAX_TOKENS,
        }
    }
}

impl ServerConfig {
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CONCEPT_BATCH_SIZE`: pairs per request, default 10, clamped to 1..=50
    /// - `CONCEPT_MAX_TOKENS`: completion budget, default 1024
    ///
    /// # Errors
    ///
    /// Returns an error message when `PORT` is set but is not a valid port.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| format!("invalid PORT '{raw}': {e}"))?,
            None => DEFAULT_PORT,
        };
        let concept_batch_size = lookup("CONCEPT_BATCH_SIZE")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_CONCEPT_BATCH_SIZE)
            .clamp(1, MAX_CONCEPT_BATCH_SIZE);
        let concept_max_tokens = lookup("CONCEPT_MAX_TOKENS")
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_CONCEPT_MAX_TOKENS);

        Ok(Self { port, concept_batch_size, concept_max_tokens })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
