use std::sync::Arc;

use config::{ServerSettings, StoreLocation};
use promptmaster::MockLlm;
use tokio::net::TcpListener;

/// Spawns the API on `127.0.0.1:0` with an in-memory store; returns the `/api` base URL.
pub async fn spawn_api(llm: MockLlm) -> (String, tokio::task::JoinHandle<()>) {
    spawn_api_with(llm, ServerSettings::default()).await
}

/// Like [`spawn_api`] with caller settings; the store is always in-memory.
pub async fn spawn_api_with(
    llm: MockLlm,
    settings: ServerSettings,
) -> (String, tokio::task::JoinHandle<()>) {
    let settings = ServerSettings {
        store: StoreLocation::InMemory,
        ..settings
    };
    let state = serve::prepare_state(&settings, Arc::new(llm)).await.unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let _ = serve::run_serve_on_listener(listener, state, &settings).await;
    });
    (format!("http://{}/api", addr), handle)
}
