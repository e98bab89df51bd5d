//! HTTP/JSON server for PromptMaster (axum).
//!
//! Routes: `GET /`, `GET /api/categories`, `GET /api/history`, `DELETE /api/history/:id`,
//! `GET /api/templates`, `POST /api/optimize`.
//!
//! **Public API**: [`run_serve`], [`run_serve_on_listener`], [`prepare_state`].

mod app;
mod error;
mod handlers;

use std::sync::Arc;

use config::{ServerSettings, StoreLocation};
use promptmaster::{
    seed_templates_if_empty, InMemoryStore, LlmClient, LlmProvider, PromptStore, SqliteStore,
};
use tokio::net::TcpListener;
use tracing::{info, warn};

pub use app::{cors_layer, router, AppState, UnconfiguredLlm};
pub use error::{ApiError, ErrorBody};
pub use handlers::{CategoriesResponse, MessageResponse};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Opens the configured store and seeds templates when it has none.
pub async fn open_store(location: &StoreLocation) -> Result<Arc<dyn PromptStore>, BoxError> {
    let store: Arc<dyn PromptStore> = match location {
        StoreLocation::InMemory => Arc::new(InMemoryStore::new()),
        StoreLocation::Sqlite(path) => {
            info!(path = %path.display(), "opening sqlite store");
            Arc::new(SqliteStore::new(path)?)
        }
    };
    seed_templates_if_empty(store.as_ref()).await?;
    Ok(store)
}

/// LLM client from the environment, or [`UnconfiguredLlm`] when no provider is set.
pub fn llm_from_env() -> Arc<dyn LlmClient> {
    match LlmProvider::from_env() {
        Ok(provider) => {
            let llm = provider.build();
            info!(llm = %llm.label(), "LLM provider selected");
            llm
        }
        Err(e) => {
            warn!("{}; optimize requests will fail until a key is configured", e);
            Arc::new(UnconfiguredLlm::new(e.to_string()))
        }
    }
}

/// Store, seed data and LLM assembled into shared state.
pub async fn prepare_state(
    settings: &ServerSettings,
    llm: Arc<dyn LlmClient>,
) -> Result<Arc<AppState>, BoxError> {
    let store = open_store(&settings.store).await?;
    Ok(Arc::new(AppState::new(llm, store, settings.history_limit)))
}

/// Serves on an existing listener until the future is dropped. Used by tests (bind
/// `127.0.0.1:0`, then pass the listener).
pub async fn run_serve_on_listener(
    listener: TcpListener,
    state: Arc<AppState>,
    settings: &ServerSettings,
) -> Result<(), BoxError> {
    let addr = listener.local_addr()?;
    info!("PromptMaster API listening on http://{}", addr);
    let app = router(state, &settings.cors_origins);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

/// Binds `settings.addr`, builds state with the LLM from the environment, and serves until Ctrl-C.
pub async fn run_serve(settings: &ServerSettings) -> Result<(), BoxError> {
    let state = prepare_state(settings, llm_from_env()).await?;
    let listener = TcpListener::bind(&settings.addr).await?;
    run_serve_on_listener(listener, state, settings).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
}
