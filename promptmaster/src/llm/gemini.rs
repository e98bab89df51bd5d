//! Google Gemini `generateContent` client implementing [`LlmClient`].
//!
//! Plain reqwest + serde: system messages go into `systemInstruction`, user and assistant
//! messages into `contents` with roles `user` / `model`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::llm::{LlmClient, LlmError, LlmResponse, LlmUsage};
use crate::message::Message;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GEMINI_BASE: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    contents: Vec<Content>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
    #[serde(default)]
    total_token_count: u32,
}

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_base(api_key, DEFAULT_GEMINI_BASE, model)
    }

    pub fn with_base(
        api_key: impl Into<String>,
        base_url: &str,
        model: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    fn build_request(messages: &[Message]) -> GenerateRequest {
        let system: Vec<Part> = messages
            .iter()
            .filter_map(|m| match m {
                Message::System(s) => Some(Part { text: s.clone() }),
                _ => None,
            })
            .collect();
        let contents = messages
            .iter()
            .filter_map(|m| {
                let role = match m {
                    Message::System(_) => return None,
                    Message::User(_) => "user",
                    Message::Assistant(_) => "model",
                };
                Some(Content {
                    role: Some(role.to_string()),
                    parts: vec![Part {
                        text: m.content().to_string(),
                    }],
                })
            })
            .collect();
        GenerateRequest {
            system_instruction: (!system.is_empty()).then_some(Content {
                role: None,
                parts: system,
            }),
            contents,
        }
    }

    fn parse_response(resp: GenerateResponse) -> Result<LlmResponse, LlmError> {
        let usage = resp.usage_metadata.map(|u| LlmUsage {
            prompt_tokens: u.prompt_token_count,
            completion_tokens: u.candidates_token_count,
            total_tokens: u.total_token_count,
        });
        let content: String = resp
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().map(|p| p.text).collect())
            .ok_or(LlmError::EmptyResponse)?;
        Ok(LlmResponse { content, usage })
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    fn label(&self) -> String {
        format!("gemini/{}", self.model)
    }

    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, LlmError> {
        let body = Self::build_request(messages);
        debug!(model = %self.model, message_count = messages.len(), "Gemini generateContent");
        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Request(format!("Gemini request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(LlmError::Request(format!(
                "Gemini API error {}: {}",
                status, text
            )));
        }
        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Request(format!("Gemini response parse failed: {}", e)))?;
        Self::parse_response(parsed)
    }
}
