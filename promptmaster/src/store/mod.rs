//! Persistence for templates and optimization history.
//!
//! [`PromptStore`] is the seam; [`SqliteStore`] persists to a file and
//! [`InMemoryStore`] keeps everything in the process. History lists are newest-first.

mod memory;
mod sqlite;

pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;

use async_trait::async_trait;
use tracing::info;

use crate::history::HistoryItem;
use crate::template::{seed_templates, Template};

/// Error from [`PromptStore`] operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StoreError {
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("store error: {0}")]
    Other(String),
}

#[async_trait]
pub trait PromptStore: Send + Sync {
    async fn count_templates(&self) -> Result<usize, StoreError>;

    async fn insert_templates(&self, templates: &[Template]) -> Result<(), StoreError>;

    /// Templates in insertion order; only those of `category` when given.
    async fn list_templates(&self, category: Option<&str>) -> Result<Vec<Template>, StoreError>;

    async fn insert_history(&self, item: &HistoryItem) -> Result<(), StoreError>;

    /// At most `limit` items, newest `timestamp` first; ties go to the later insert.
    async fn list_history(&self, limit: u32) -> Result<Vec<HistoryItem>, StoreError>;

    /// Deletes one item. Returns `false` when no item had that id.
    async fn delete_history(&self, id: &str) -> Result<bool, StoreError>;
}

/// Inserts the built-in templates when the store has none. Returns how many were inserted.
pub async fn seed_templates_if_empty(store: &dyn PromptStore) -> Result<usize, StoreError> {
    if store.count_templates().await? > 0 {
        return Ok(0);
    }
    let seeds = seed_templates();
    store.insert_templates(&seeds).await?;
    info!(count = seeds.len(), "seeded prompt templates");
    Ok(seeds.len())
}
