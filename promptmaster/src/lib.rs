//! # PromptMaster
//!
//! Core of the PromptMaster service: pick a category, submit a prompt, get back a version
//! rewritten by an LLM for clarity and effectiveness. Every result is kept in a history
//! that can be listed and pruned; per-category templates give users a starting point.
//!
//! ## Main modules
//!
//! - [`category`]: the static category registry ([`Category`], [`category::guidance`]).
//! - [`template`]: [`Template`] and the built-in seed set.
//! - [`history`]: [`HistoryItem`], [`OptimizeRequest`], [`OptimizeResponse`].
//! - [`llm`]: [`LlmClient`] trait with [`ChatOpenAI`], [`GeminiClient`], [`MockLlm`];
//!   [`LlmProvider`] selects one from the environment.
//! - [`store`]: [`PromptStore`] with [`SqliteStore`] and [`InMemoryStore`].
//! - [`optimizer`]: [`Optimizer`], which ties an LLM to a store.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use promptmaster::{InMemoryStore, MockLlm, OptimizeRequest, Optimizer};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let optimizer = Optimizer::new(Arc::new(MockLlm::echo()), Arc::new(InMemoryStore::new()));
//! let item = optimizer
//!     .optimize(&OptimizeRequest::new("write a haiku", "creative_writing"))
//!     .await
//!     .unwrap();
//! println!("{}", item.optimized_prompt);
//! # }
//! ```

pub mod category;
pub mod history;
pub mod llm;
pub mod message;
pub mod optimizer;
pub mod store;
pub mod template;

pub use category::{categories, Category};
pub use history::{HistoryItem, OptimizeRequest, OptimizeResponse};
pub use llm::{ChatOpenAI, GeminiClient, LlmClient, LlmError, LlmProvider, LlmResponse, MockLlm};
pub use message::Message;
pub use optimizer::{build_optimization_request, OptimizeError, Optimizer};
pub use store::{seed_templates_if_empty, InMemoryStore, PromptStore, SqliteStore, StoreError};
pub use template::Template;
