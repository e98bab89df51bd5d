//! The optimize operation: category-aware request → one LLM call → one history write.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::category;
use crate::history::{HistoryItem, OptimizeRequest, OptimizeResponse};
use crate::llm::{LlmClient, LlmError};
use crate::message::Message;
use crate::store::{PromptStore, StoreError};

/// System message sent with every optimization request.
pub const SYSTEM_PROMPT: &str = "You are an expert prompt optimization specialist. Your job is to take user prompts and make them significantly better by:

1. Making them more specific and detailed
2. Improving clarity and structure
3. Adding relevant context and examples
4. Ensuring they follow best practices for the given category

For each prompt, provide a comprehensive optimized version that will produce much better results from AI models. Focus on:
- Clear instructions and expectations
- Specific formatting requirements when relevant
- Context that helps the AI understand the task better
- Examples when they would be helpful
- Appropriate tone and style for the category

Return ONLY the optimized prompt, no explanations or additional text.";

#[derive(Debug, thiserror::Error)]
pub enum OptimizeError {
    #[error("original prompt is empty")]
    EmptyPrompt,
    #[error("category is empty")]
    EmptyCategory,
    #[error(transparent)]
    Llm(#[from] LlmError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// User message for the LLM: category label, its guidance, then the prompt verbatim.
pub fn build_optimization_request(req: &OptimizeRequest) -> String {
    format!(
        "Category: {}\nSpecial focus: {}\n\nOriginal prompt:\n{}",
        category::title_case(&req.category),
        category::guidance(&req.category),
        req.original_prompt
    )
}

/// Glues an [`LlmClient`] to a [`PromptStore`].
#[derive(Clone)]
pub struct Optimizer {
    llm: Arc<dyn LlmClient>,
    store: Arc<dyn PromptStore>,
}

impl Optimizer {
    pub fn new(llm: Arc<dyn LlmClient>, store: Arc<dyn PromptStore>) -> Self {
        Self { llm, store }
    }

    /// Validates, calls the LLM once, stores the trimmed reply as a new history item and
    /// returns it. Nothing is stored when the LLM call fails.
    ///
    /// Unknown category ids are accepted; they get the default guidance.
    pub async fn optimize(&self, req: &OptimizeRequest) -> Result<OptimizeResponse, OptimizeError> {
        if req.original_prompt.trim().is_empty() {
            return Err(OptimizeError::EmptyPrompt);
        }
        if req.category.trim().is_empty() {
            return Err(OptimizeError::EmptyCategory);
        }
        if category::find(&req.category).is_none() {
            warn!(category = %req.category, "optimizing with unregistered category");
        }

        let messages = [
            Message::system(SYSTEM_PROMPT),
            Message::user(build_optimization_request(req)),
        ];
        debug!(llm = %self.llm.label(), category = %req.category, "optimize request");
        let response = self.llm.invoke(&messages).await?;

        let item = HistoryItem::new(
            req.original_prompt.clone(),
            response.content.trim(),
            req.category.clone(),
        );
        self.store.insert_history(&item).await?;
        match &response.usage {
            Some(u) => info!(
                id = %item.id,
                category = %item.category,
                prompt_tokens = u.prompt_tokens,
                completion_tokens = u.completion_tokens,
                total_tokens = u.total_tokens,
                "prompt optimized"
            ),
            None => info!(id = %item.id, category = %item.category, "prompt optimized"),
        }
        Ok(item)
    }
}
