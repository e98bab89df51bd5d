//! Chat messages sent to an [`LlmClient`](crate::llm::LlmClient).

/// A single chat message. The optimizer sends one system and one user message.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Message {
    System(String),
    User(String),
    Assistant(String),
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self::System(content.into())
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::User(content.into())
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::Assistant(content.into())
    }

    pub fn content(&self) -> &str {
        match self {
            Self::System(c) | Self::User(c) | Self::Assistant(c) => c,
        }
    }
}
