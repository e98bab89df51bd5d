//! In-memory [`PromptStore`]: two vectors behind a `RwLock`.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::history::HistoryItem;
use crate::store::{PromptStore, StoreError};
use crate::template::Template;

#[derive(Default)]
struct Inner {
    templates: Vec<Template>,
    history: Vec<HistoryItem>,
}

#[derive(Default)]
pub struct InMemoryStore {
    inner: RwLock<Inner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned<T>(_: T) -> StoreError {
        StoreError::Other("in-memory store lock poisoned".to_string())
    }
}

#[async_trait]
impl PromptStore for InMemoryStore {
    async fn count_templates(&self) -> Result<usize, StoreError> {
        Ok(self.inner.read().map_err(Self::poisoned)?.templates.len())
    }

    async fn insert_templates(&self, templates: &[Template]) -> Result<(), StoreError> {
        let mut inner = self.inner.write().map_err(Self::poisoned)?;
        inner.templates.extend_from_slice(templates);
        Ok(())
    }

    async fn list_templates(&self, category: Option<&str>) -> Result<Vec<Template>, StoreError> {
        let inner = self.inner.read().map_err(Self::poisoned)?;
        Ok(inner
            .templates
            .iter()
            .filter(|t| category.map_or(true, |c| t.category == c))
            .cloned()
            .collect())
    }

    async fn insert_history(&self, item: &HistoryItem) -> Result<(), StoreError> {
        let mut inner = self.inner.write().map_err(Self::poisoned)?;
        if inner.history.iter().any(|h| h.id == item.id) {
            return Err(StoreError::Other(format!("duplicate history id {}", item.id)));
        }
        inner.history.push(item.clone());
        Ok(())
    }

    async fn list_history(&self, limit: u32) -> Result<Vec<HistoryItem>, StoreError> {
        let inner = self.inner.read().map_err(Self::poisoned)?;
        // Newest insert first, then a stable sort keeps that order among equal timestamps.
        let mut items: Vec<HistoryItem> = inner.history.iter().rev().cloned().collect();
        items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        items.truncate(limit as usize);
        Ok(items)
    }

    async fn delete_history(&self, id: &str) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().map_err(Self::poisoned)?;
        let before = inner.history.len();
        inner.history.retain(|h| h.id != id);
        Ok(inner.history.len() < before)
    }
}
