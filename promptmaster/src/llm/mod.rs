//! LLM adapter: one request in, one text reply out.
//!
//! The optimizer builds a system message and a user message and hands them to an
//! [`LlmClient`]. Implementations: [`ChatOpenAI`] (OpenAI-compatible chat completions),
//! [`GeminiClient`] (Google `generateContent`), and [`MockLlm`] for tests and offline runs.
//! [`LlmProvider`] picks one from the environment.
//!
//! No streaming, no fallback model, no caching: a failed call is an [`LlmError`] and
//! nothing else happens.

mod gemini;
mod mock;
mod openai;
mod provider;

pub use gemini::GeminiClient;
pub use mock::MockLlm;
pub use openai::ChatOpenAI;
pub use provider::LlmProvider;

use async_trait::async_trait;

use crate::message::Message;

/// Error from an [`LlmClient`] or from provider selection.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LlmError {
    /// No usable provider configuration (e.g. no API key).
    #[error("{0}")]
    Config(String),
    /// Building or sending the request failed, or the provider answered with an error.
    #[error("LLM request failed: {0}")]
    Request(String),
    /// The provider answered but the reply carried no text.
    #[error("LLM returned no content")]
    EmptyResponse,
}

/// Token usage for one call, when the provider reports it.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LlmUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Reply from one completion.
#[derive(Clone, Debug, Default)]
pub struct LlmResponse {
    /// Assistant text, untrimmed.
    pub content: String,
    pub usage: Option<LlmUsage>,
}

/// LLM client: given messages, returns the assistant text.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Short provider label for logs, e.g. `"openai/gpt-4o"`.
    fn label(&self) -> String;

    /// Runs one completion over `messages`.
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, LlmError>;
}
