//! One-shot client subcommands. Each returns the text to print on stdout.

use client::{ClientError, PromptApi};
use promptmaster::{category, OptimizeRequest};

use crate::render;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Usage(String),
}

fn label(id: &str) -> String {
    match category::find(id) {
        Some(c) => format!("{} {}", c.icon, c.name),
        None => id.to_string(),
    }
}

pub async fn categories(api: &dyn PromptApi, json: bool) -> Result<String, CommandError> {
    let list = api.categories().await?;
    if json {
        return Ok(serde_json::to_string_pretty(&list)?);
    }
    Ok(render::categories_table(&list))
}

pub async fn templates(
    api: &dyn PromptApi,
    category: Option<&str>,
    json: bool,
) -> Result<String, CommandError> {
    let list = api.templates(category).await?;
    if json {
        return Ok(serde_json::to_string_pretty(&list)?);
    }
    let refs: Vec<_> = list.iter().collect();
    Ok(render::templates_list(&refs, label))
}

/// History newest first. `limit` is passed to the server; `None` takes its default page size.
pub async fn history(
    api: &dyn PromptApi,
    limit: Option<u32>,
    json: bool,
) -> Result<String, CommandError> {
    let list = api.history(limit).await?;
    if json {
        return Ok(serde_json::to_string_pretty(&list)?);
    }
    Ok(render::history_list(&list, label))
}

pub async fn delete(api: &dyn PromptApi, id: &str) -> Result<String, CommandError> {
    api.delete_history(id).await?;
    Ok(format!("deleted {}", id))
}

/// Prints only the optimized text, or the whole item with `json`.
pub async fn optimize(
    api: &dyn PromptApi,
    category: &str,
    prompt: &str,
    json: bool,
) -> Result<String, CommandError> {
    if prompt.trim().is_empty() {
        return Err(CommandError::Usage("prompt is empty".to_string()));
    }
    let item = api
        .optimize(&OptimizeRequest::new(prompt, category))
        .await?;
    if json {
        return Ok(serde_json::to_string_pretty(&item)?);
    }
    Ok(item.optimized_prompt)
}
