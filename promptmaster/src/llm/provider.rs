//! Provider selection from environment variables.
//!
//! Order: `OPENAI_API_KEY` → OpenAI-compatible; else `GEMINI_API_KEY` → Gemini;
//! else `PROMPTMASTER_MOCK_LLM` truthy → echo mock; else a config error.

use std::sync::Arc;

use super::gemini::{DEFAULT_GEMINI_BASE, DEFAULT_GEMINI_MODEL};
use super::openai::{DEFAULT_OPENAI_BASE, DEFAULT_OPENAI_MODEL};
use super::{ChatOpenAI, GeminiClient, LlmClient, LlmError, MockLlm};

/// Which LLM backend to talk to, with its settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LlmProvider {
    OpenAi {
        api_key: String,
        base_url: String,
        model: String,
    },
    Gemini {
        api_key: String,
        base_url: String,
        model: String,
    },
    /// Echo mock; no network.
    Mock,
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn is_truthy(v: Option<String>) -> bool {
    matches!(
        v.as_deref().map(str::trim),
        Some("1") | Some("true") | Some("yes")
    )
}

impl LlmProvider {
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, LlmError> {
        if let Some(api_key) = non_empty(lookup("OPENAI_API_KEY")) {
            return Ok(Self::OpenAi {
                api_key,
                base_url: non_empty(lookup("OPENAI_BASE_URL"))
                    .or_else(|| non_empty(lookup("OPENAI_API_BASE")))
                    .unwrap_or_else(|| DEFAULT_OPENAI_BASE.to_string()),
                model: non_empty(lookup("OPENAI_MODEL"))
                    .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            });
        }
        if let Some(api_key) = non_empty(lookup("GEMINI_API_KEY")) {
            return Ok(Self::Gemini {
                api_key,
                base_url: non_empty(lookup("GEMINI_BASE_URL"))
                    .unwrap_or_else(|| DEFAULT_GEMINI_BASE.to_string()),
                model: non_empty(lookup("GEMINI_MODEL"))
                    .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            });
        }
        if is_truthy(lookup("PROMPTMASTER_MOCK_LLM")) {
            return Ok(Self::Mock);
        }
        Err(LlmError::Config(
            "No LLM key found. Please set OPENAI_API_KEY or GEMINI_API_KEY".to_string(),
        ))
    }

    pub fn build(&self) -> Arc<dyn LlmClient> {
        match self {
            Self::OpenAi {
                api_key,
                base_url,
                model,
            } => Arc::new(ChatOpenAI::with_base(api_key.clone(), base_url, model.clone())),
            Self::Gemini {
                api_key,
                base_url,
                model,
            } => Arc::new(GeminiClient::with_base(api_key.clone(), base_url, model.clone())),
            Self::Mock => Arc::new(MockLlm::echo()),
        }
    }
}
