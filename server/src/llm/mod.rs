//! LLM access for concept generation.
//!
//! `LlmClient` is the production [`LlmChat`]: one provider picked at startup
//! from `LLM_PROVIDER`, one model, one HTTP client. Routes and services only
//! hold an `Arc<dyn LlmChat>`, so their tests swap in canned replies.

pub mod anthropic;
pub mod config;
pub mod openai;
pub mod types;

use anthropic::AnthropicClient;
use config::{LlmConfig, LlmProviderKind};
use openai::OpenAiClient;
pub use types::LlmChat;
use types::{ChatResponse, LlmError, Message};

pub struct LlmClient {
    backend: Backend,
    model: String,
}

enum Backend {
    Anthropic(AnthropicClient),
    OpenAi(OpenAiClient),
}

impl LlmClient {
    /// Read [`LlmConfig`] from the process environment and build the client.
    ///
    /// # Errors
    ///
    /// Fails when the key variable is unset, a value does not parse, or the
    /// HTTP client cannot be built.
    pub fn from_env() -> Result<Self, LlmError> {
        LlmConfig::from_env().and_then(Self::from_config)
    }

    /// # Errors
    ///
    /// Returns [`LlmError::HttpClientBuild`] when the provider client fails to build.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        let LlmConfig { provider, api_key, model, openai_mode, openai_base_url, timeouts } = config;
        let backend = match provider {
            LlmProviderKind::Anthropic => Backend::Anthropic(AnthropicClient::new(api_key, timeouts)?),
            LlmProviderKind::OpenAi => {
                Backend::OpenAi(OpenAiClient::new(api_key, openai_mode, openai_base_url, timeouts)?)
            }
        };
        Ok(Self { backend, model })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Provider name for the startup log line.
    #[must_use]
    pub fn provider(&self) -> &'static str {
        match self.backend {
            Backend::Anthropic(_) => "anthropic",
            Backend::OpenAi(_) => "openai",
        }
    }
}

#[async_trait::async_trait]
impl LlmChat for LlmClient {
    async fn chat(&self, max_tokens: u32, system: &str, messages: &[Message]) -> Result<ChatResponse, LlmError> {
        match &self.backend {
            Backend::Anthropic(client) => client.chat(&self.model, max_tokens, system, messages).await,
            Backend::OpenAi(client) => client.chat(&self.model, max_tokens, system, messages).await,
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
