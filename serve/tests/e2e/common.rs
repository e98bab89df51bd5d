//! Shared helpers for e2e tests.

use std::sync::Arc;

use config::{ServerSettings, StoreLocation};
use promptmaster::LlmClient;
use tokio::net::TcpListener;

pub struct TestServer {
    /// e.g. `http://127.0.0.1:41234`
    pub base: String,
    pub http: reqwest::Client,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    pub fn api(&self, path: &str) -> String {
        format!("{}/api{}", self.base, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub fn in_memory_settings() -> ServerSettings {
    ServerSettings {
        addr: "127.0.0.1:0".to_string(),
        store: StoreLocation::InMemory,
        ..ServerSettings::default()
    }
}

/// Binds a random port and serves with `llm` over a fresh seeded store.
pub async fn spawn_server(llm: Arc<dyn LlmClient>) -> TestServer {
    spawn_server_with(llm, in_memory_settings()).await
}

pub async fn spawn_server_with(llm: Arc<dyn LlmClient>, settings: ServerSettings) -> TestServer {
    let state = serve::prepare_state(&settings, llm).await.unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        if let Err(e) = serve::run_serve_on_listener(listener, state, &settings).await {
            eprintln!("[e2e] server error: {}", e);
        }
    });
    TestServer {
        base: format!("http://{}", addr),
        http: reqwest::Client::new(),
        handle,
    }
}

/// GETs `url` and returns `(status, json body)`.
pub async fn get_json(server: &TestServer, url: &str) -> (u16, serde_json::Value) {
    let resp = server.http.get(url).send().await.unwrap();
    let status = resp.status().as_u16();
    let body: serde_json::Value = resp.json().await.unwrap();
    eprintln!("[e2e] GET {} -> {} {}", url, status, body);
    (status, body)
}
