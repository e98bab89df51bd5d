//! Mock LLM for tests and offline runs.
//!
//! Three modes: a fixed reply, an echo of the last user message, or a fixed failure.
//! Every call is counted and the last message list is kept for assertions.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm::{LlmClient, LlmError, LlmResponse};
use crate::message::Message;

enum Mode {
    Fixed(String),
    Echo,
    Fail(String),
}

pub struct MockLlm {
    mode: Mode,
    calls: AtomicUsize,
    last_messages: Mutex<Vec<Message>>,
}

impl MockLlm {
    fn with_mode(mode: Mode) -> Self {
        Self {
            mode,
            calls: AtomicUsize::new(0),
            last_messages: Mutex::new(Vec::new()),
        }
    }

    /// Always replies with `content`.
    pub fn fixed(content: impl Into<String>) -> Self {
        Self::with_mode(Mode::Fixed(content.into()))
    }

    /// Replies with `[MOCKED OPTIMIZED PROMPT]` followed by the last user message.
    pub fn echo() -> Self {
        Self::with_mode(Mode::Echo)
    }

    /// Every call fails with [`LlmError::Request`].
    pub fn failing(reason: impl Into<String>) -> Self {
        Self::with_mode(Mode::Fail(reason.into()))
    }

    /// Number of `invoke` calls so far, including failed ones.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Messages passed to the most recent call.
    pub fn last_messages(&self) -> Vec<Message> {
        self.last_messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    fn label(&self) -> String {
        "mock".to_string()
    }

    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_messages.lock() {
            *last = messages.to_vec();
        }
        let content = match &self.mode {
            Mode::Fixed(c) => c.clone(),
            Mode::Echo => {
                let user = messages
                    .iter()
                    .rev()
                    .find_map(|m| match m {
                        Message::User(u) => Some(u.as_str()),
                        _ => None,
                    })
                    .unwrap_or_default();
                format!("[MOCKED OPTIMIZED PROMPT]\nOriginal: {}\n", user)
            }
            Mode::Fail(reason) => return Err(LlmError::Request(reason.clone())),
        };
        Ok(LlmResponse {
            content,
            usage: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixed_reply_and_call_count() {
        let llm = MockLlm::fixed("better");
        let out = llm.invoke(&[Message::user("x")]).await.unwrap();
        assert_eq!(out.content, "better");
        assert_eq!(llm.calls(), 1);
        assert_eq!(llm.last_messages(), vec![Message::user("x")]);
    }

    #[tokio::test]
    async fn echo_uses_last_user_message() {
        let llm = MockLlm::echo();
        let out = llm
            .invoke(&[Message::system("s"), Message::user("first"), Message::user("second")])
            .await
            .unwrap();
        assert_eq!(out.content, "[MOCKED OPTIMIZED PROMPT]\nOriginal: second\n");
    }

    #[tokio::test]
    async fn failing_counts_the_call() {
        let llm = MockLlm::failing("down");
        let err = llm.invoke(&[Message::user("x")]).await.unwrap_err();
        assert!(err.to_string().contains("down"));
        assert_eq!(llm.calls(), 1);
    }
}
