//! Route handlers. Each one is a single store read/write or one optimizer call.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use promptmaster::{Category, HistoryItem, OptimizeRequest, OptimizeResponse, Template};
use serde::{Deserialize, Serialize};

use crate::app::AppState;
use crate::error::ApiError;

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TemplatesQuery {
    pub category: Option<String>,
}

/// `GET /`
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "PromptMaster API is running".to_string(),
    })
}

/// `GET /api/categories`
pub async fn list_categories() -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: promptmaster::categories(),
    })
}

/// `GET /api/history[?limit=N]`, newest first.
pub async fn list_history(
    State(state): State<Arc<AppState>>,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> Result<Json<Vec<HistoryItem>>, ApiError> {
    let Query(query) = query?;
    let limit = query.limit.unwrap_or(state.history_limit);
    tracing::debug!(limit, "listing history");
    let items = state.store.list_history(limit).await?;
    Ok(Json(items))
}

/// `DELETE /api/history/:id`
pub async fn delete_history(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !state.store.delete_history(&id).await? {
        return Err(ApiError::NotFound("History item not found".to_string()));
    }
    tracing::info!(id = %id, "history item deleted");
    Ok(Json(MessageResponse {
        message: "History item deleted successfully".to_string(),
    }))
}

/// `GET /api/templates[?category=]`. An empty `category` means no filter.
pub async fn list_templates(
    State(state): State<Arc<AppState>>,
    query: Result<Query<TemplatesQuery>, QueryRejection>,
) -> Result<Json<Vec<Template>>, ApiError> {
    let Query(query) = query?;
    let category = query.category.as_deref().filter(|c| !c.is_empty());
    let templates = state.store.list_templates(category).await?;
    Ok(Json(templates))
}

/// `POST /api/optimize`
pub async fn optimize(
    State(state): State<Arc<AppState>>,
    body: Result<Json<OptimizeRequest>, JsonRejection>,
) -> Result<Json<OptimizeResponse>, ApiError> {
    let Json(request) = body?;
    let item = state.optimizer.optimize(&request).await?;
    Ok(Json(item))
}
