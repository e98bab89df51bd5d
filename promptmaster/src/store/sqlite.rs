//! SQLite-backed [`PromptStore`]. Tables `templates` and `prompt_history`.
//!
//! Each call opens its own connection inside `spawn_blocking`; `rowid` breaks timestamp
//! ties so later inserts list first.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use rusqlite::{params, Connection};

use crate::history::HistoryItem;
use crate::store::{PromptStore, StoreError};
use crate::template::Template;

pub struct SqliteStore {
    db_path: PathBuf,
}

impl SqliteStore {
    /// Opens (or creates) the database at `path` and ensures the schema exists.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let db_path = path.as_ref().to_path_buf();
        let conn = Connection::open(&db_path)?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS templates (
                id TEXT PRIMARY KEY,
                category TEXT NOT NULL,
                title TEXT NOT NULL,
                template TEXT NOT NULL,
                description TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_templates_category ON templates(category);
            CREATE TABLE IF NOT EXISTS prompt_history (
                id TEXT PRIMARY KEY,
                original_prompt TEXT NOT NULL,
                optimized_prompt TEXT NOT NULL,
                category TEXT NOT NULL,
                timestamp TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_prompt_history_timestamp ON prompt_history(timestamp);
            "#,
        )?;
        Ok(Self { db_path })
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Runs `f` on a fresh connection in the blocking pool.
    async fn with_conn<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&mut Connection) -> Result<T, StoreError> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = Connection::open(&db_path)?;
            f(&mut conn)
        })
        .await
        .map_err(|e| StoreError::Other(e.to_string()))?
    }
}

fn row_to_template(row: &rusqlite::Row<'_>) -> rusqlite::Result<Template> {
    Ok(Template {
        id: row.get(0)?,
        category: row.get(1)?,
        title: row.get(2)?,
        template_text: row.get(3)?,
        description: row.get(4)?,
    })
}

fn row_to_history(row: &rusqlite::Row<'_>) -> rusqlite::Result<HistoryItem> {
    Ok(HistoryItem {
        id: row.get(0)?,
        original_prompt: row.get(1)?,
        optimized_prompt: row.get(2)?,
        category: row.get(3)?,
        timestamp: row.get(4)?,
    })
}

#[async_trait]
impl PromptStore for SqliteStore {
    async fn count_templates(&self) -> Result<usize, StoreError> {
        self.with_conn(|conn| {
            let n: i64 = conn.query_row("SELECT COUNT(*) FROM templates", [], |r| r.get(0))?;
            Ok(n as usize)
        })
        .await
    }

    async fn insert_templates(&self, templates: &[Template]) -> Result<(), StoreError> {
        let templates = templates.to_vec();
        self.with_conn(move |conn| {
            let tx = conn.transaction()?;
            {
                let mut stmt = tx.prepare(
                    "INSERT INTO templates (id, category, title, template, description) VALUES (?1, ?2, ?3, ?4, ?5)",
                )?;
                for t in &templates {
                    stmt.execute(params![t.id, t.category, t.title, t.template_text, t.description])?;
                }
            }
            tx.commit()?;
            Ok(())
        })
        .await
    }

    async fn list_templates(&self, category: Option<&str>) -> Result<Vec<Template>, StoreError> {
        let category = category.map(str::to_string);
        self.with_conn(move |conn| {
            let out = match category {
                Some(c) => {
                    let mut stmt = conn.prepare(
                        "SELECT id, category, title, template, description FROM templates WHERE category = ?1 ORDER BY rowid ASC",
                    )?;
                    let rows = stmt.query_map(params![c], row_to_template)?;
                    rows.collect::<rusqlite::Result<Vec<_>>>()?
                }
                None => {
                    let mut stmt = conn.prepare(
                        "SELECT id, category, title, template, description FROM templates ORDER BY rowid ASC",
                    )?;
                    let rows = stmt.query_map([], row_to_template)?;
                    rows.collect::<rusqlite::Result<Vec<_>>>()?
                }
            };
            Ok(out)
        })
        .await
    }

    async fn insert_history(&self, item: &HistoryItem) -> Result<(), StoreError> {
        let item = item.clone();
        self.with_conn(move |conn| {
            conn.execute(
                "INSERT INTO prompt_history (id, original_prompt, optimized_prompt, category, timestamp) VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    item.id,
                    item.original_prompt,
                    item.optimized_prompt,
                    item.category,
                    item.timestamp
                ],
            )?;
            Ok(())
        })
        .await
    }

    async fn list_history(&self, limit: u32) -> Result<Vec<HistoryItem>, StoreError> {
        self.with_conn(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, original_prompt, optimized_prompt, category, timestamp FROM prompt_history ORDER BY timestamp DESC, rowid DESC LIMIT ?1",
            )?;
            let rows = stmt.query_map(params![limit as i64], row_to_history)?;
            Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
        })
        .await
    }

    async fn delete_history(&self, id: &str) -> Result<bool, StoreError> {
        let id = id.to_string();
        self.with_conn(move |conn| {
            let n = conn.execute("DELETE FROM prompt_history WHERE id = ?1", params![id])?;
            Ok(n > 0)
        })
        .await
    }
}
