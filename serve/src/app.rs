//! Axum app: shared state, router, CORS and request tracing.

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::{HeaderValue, Method};
use axum::routing::{delete, get, post};
use axum::Router;
use config::CorsOrigins;
use promptmaster::{LlmClient, LlmError, LlmResponse, Message, Optimizer, PromptStore};
use tower_http::cors::{AllowHeaders, AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;

/// Shared state for every route.
pub struct AppState {
    pub optimizer: Optimizer,
    pub store: Arc<dyn PromptStore>,
    /// Default `limit` for `GET /api/history`.
    pub history_limit: u32,
}

impl AppState {
    pub fn new(llm: Arc<dyn LlmClient>, store: Arc<dyn PromptStore>, history_limit: u32) -> Self {
        Self {
            optimizer: Optimizer::new(llm, Arc::clone(&store)),
            store,
            history_limit,
        }
    }
}

/// Stand-in when no provider is configured: the server still starts and serves history and
/// templates, and every optimize call fails with the configuration message.
pub struct UnconfiguredLlm {
    reason: String,
}

impl UnconfiguredLlm {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl LlmClient for UnconfiguredLlm {
    fn label(&self) -> String {
        "unconfigured".to_string()
    }

    async fn invoke(&self, _messages: &[Message]) -> Result<LlmResponse, LlmError> {
        Err(LlmError::Config(self.reason.clone()))
    }
}

/// Builds the CORS layer. A wildcard cannot be combined with credentials, so credentials are
/// only allowed for an explicit origin list.
pub fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    match origins {
        CorsOrigins::Any => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsOrigins::List(list) => {
            let values: Vec<HeaderValue> = list
                .iter()
                .filter_map(|o| match HeaderValue::from_str(o) {
                    Ok(v) => Some(v),
                    Err(_) => {
                        tracing::warn!(origin = %o, "ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(values))
                .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
                .allow_headers(AllowHeaders::mirror_request())
                .allow_credentials(true)
        }
    }
}

/// Routes under `/api`, plus `GET /` as a liveness check.
pub fn router(state: Arc<AppState>, cors: &CorsOrigins) -> Router {
    let api = Router::new()
        .route("/categories", get(handlers::list_categories))
        .route("/history", get(handlers::list_history))
        .route("/history/:id", delete(handlers::delete_history))
        .route("/templates", get(handlers::list_templates))
        .route("/optimize", post(handlers::optimize));

    Router::new()
        .route("/", get(handlers::root))
        .nest("/api", api)
        .with_state(state)
        .layer(cors_layer(cors))
        .layer(TraceLayer::new_for_http())
}
