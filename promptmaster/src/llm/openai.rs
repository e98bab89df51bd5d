//! OpenAI-compatible Chat Completions client implementing [`LlmClient`].
//!
//! Uses `async_openai`. The base URL may point at any OpenAI-compatible proxy; `/v1` is
//! appended when missing.

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
        ChatCompletionRequestUserMessage, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use tracing::{debug, trace};

use crate::llm::{LlmClient, LlmError, LlmResponse, LlmUsage};
use crate::message::Message;

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";
pub const DEFAULT_OPENAI_BASE: &str = "https://api.openai.com/v1";

/// Chat Completions client. One request per [`invoke`](LlmClient::invoke), non-streaming.
pub struct ChatOpenAI {
    client: Client<OpenAIConfig>,
    api_base: String,
    model: String,
}

impl ChatOpenAI {
    /// Client for `model` with the given key against the public OpenAI endpoint.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_base(api_key, DEFAULT_OPENAI_BASE, model)
    }

    /// Client against a custom OpenAI-compatible base URL.
    pub fn with_base(
        api_key: impl Into<String>,
        base_url: &str,
        model: impl Into<String>,
    ) -> Self {
        let api_base = normalize_api_base(base_url);
        let config = OpenAIConfig::new()
            .with_api_key(api_key.into())
            .with_api_base(api_base.clone());
        Self {
            client: Client::with_config(config),
            api_base,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn messages_to_request(messages: &[Message]) -> Vec<ChatCompletionRequestMessage> {
        messages
            .iter()
            .map(|m| match m {
                Message::System(s) => ChatCompletionRequestMessage::System(
                    ChatCompletionRequestSystemMessage::from(s.as_str()),
                ),
                Message::User(s) => ChatCompletionRequestMessage::User(
                    ChatCompletionRequestUserMessage::from(s.as_str()),
                ),
                Message::Assistant(s) => {
                    ChatCompletionRequestMessage::Assistant((s.as_str()).into())
                }
            })
            .collect()
    }
}

/// `https://host` → `https://host/v1`; `https://host/v1/` → `https://host/v1`.
fn normalize_api_base(base: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    if base.is_empty() {
        return DEFAULT_OPENAI_BASE.to_string();
    }
    if base.ends_with("/v1") {
        base.to_string()
    } else {
        format!("{}/v1", base)
    }
}

#[async_trait]
impl LlmClient for ChatOpenAI {
    fn label(&self) -> String {
        format!("openai/{}", self.model)
    }

    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, LlmError> {
        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(self.model.clone());
        args.messages(Self::messages_to_request(messages));
        let request = args
            .build()
            .map_err(|e| LlmError::Request(format!("OpenAI request build failed: {}", e)))?;

        debug!(
            api_base = %self.api_base,
            model = %self.model,
            message_count = messages.len(),
            "OpenAI chat create"
        );
        if let Ok(js) = serde_json::to_string_pretty(&request) {
            trace!(request = %js, "OpenAI request body");
        }

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| LlmError::Request(format!("OpenAI API error: {}", e)))?;

        let usage = response.usage.as_ref().map(|u| LlmUsage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or(LlmError::EmptyResponse)?;
        let content = choice.message.content.ok_or(LlmError::EmptyResponse)?;
        debug!(chars = content.len(), usage = ?usage, "OpenAI chat done");
        Ok(LlmResponse { content, usage })
    }
}
