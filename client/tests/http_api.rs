//! `HttpApi` and `App` against a real server on `127.0.0.1:0` with a mock LLM.

use std::sync::Arc;

use client::{App, ClientError, HttpApi, MemoryClipboard, Notice, PromptApi, Tab};
use config::{ServerSettings, StoreLocation};
use promptmaster::{MockLlm, OptimizeRequest};
use tokio::net::TcpListener;

async fn spawn_server(llm: MockLlm) -> (String, tokio::task::JoinHandle<()>) {
    let settings = ServerSettings {
        store: StoreLocation::InMemory,
        ..ServerSettings::default()
    };
    let state = serve::prepare_state(&settings, Arc::new(llm)).await.unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let _ = serve::run_serve_on_listener(listener, state, &settings).await;
    });
    (format!("http://{}/api", addr), handle)
}

#[tokio::test]
async fn http_api_round_trip() {
    let (base, handle) = spawn_server(MockLlm::fixed("Improved prompt")).await;
    let api = HttpApi::new(base);

    assert_eq!(api.categories().await.unwrap().len(), 10);
    assert_eq!(api.templates(None).await.unwrap().len(), 10);
    let coding = api.templates(Some("code_generation")).await.unwrap();
    assert_eq!(coding.len(), 1);

    let item = api
        .optimize(&OptimizeRequest::new("make it better", "creative_writing"))
        .await
        .unwrap();
    assert_eq!(item.optimized_prompt, "Improved prompt");
    assert_eq!(api.history(None).await.unwrap()[0].id, item.id);

    api.delete_history(&item.id).await.unwrap();
    assert!(api.history(None).await.unwrap().is_empty());

    match api.delete_history(&item.id).await {
        Err(ClientError::Status { status, detail }) => {
            assert_eq!(status, 404);
            assert_eq!(detail, "History item not found");
        }
        other => panic!("expected 404, got {:?}", other),
    }
    handle.abort();
}

#[tokio::test]
async fn delete_sends_id_as_one_path_segment() {
    let (base, handle) = spawn_server(MockLlm::echo()).await;
    let api = HttpApi::new(base);
    let item = api
        .optimize(&OptimizeRequest::new("keep me", "email_templates"))
        .await
        .unwrap();

    for id in [format!("{}?x=1", item.id), format!("{}/extra", item.id), "a/b".to_string()] {
        match api.delete_history(&id).await {
            Err(ClientError::Status { status, detail }) => {
                assert_eq!(status, 404, "id {:?}", id);
                assert_eq!(detail, "History item not found");
            }
            other => panic!("expected 404 for {:?}, got {:?}", id, other),
        }
    }
    assert_eq!(api.history(None).await.unwrap()[0].id, item.id);
    handle.abort();
}

#[tokio::test]
async fn history_limit_is_sent_to_server() {
    let (base, handle) = spawn_server(MockLlm::echo()).await;
    let api = HttpApi::new(base);
    for i in 0..3 {
        api.optimize(&OptimizeRequest::new(format!("prompt {}", i), "social_media"))
            .await
            .unwrap();
    }
    assert_eq!(api.history(Some(2)).await.unwrap().len(), 2);
    assert_eq!(api.history(None).await.unwrap().len(), 3);
    handle.abort();
}

#[tokio::test]
async fn app_drives_server_end_to_end() {
    let (base, handle) = spawn_server(MockLlm::echo()).await;
    let mut app = App::new(HttpApi::new(base), MemoryClipboard::new());
    app.mount().await;
    assert_eq!(app.categories().len(), 10);

    app.set_tab(Tab::Templates);
    app.select_category("email_templates");
    let template = app.templates_for_selected()[0].clone();
    app.load_template(&template);
    assert_eq!(app.tab(), Tab::Optimize);

    app.optimize().await;
    assert!(app.optimized_prompt().starts_with("[MOCKED OPTIMIZED PROMPT]"));
    assert_eq!(app.history().len(), 1);

    let id = app.history()[0].id.clone();
    app.delete_history_item(&id).await;
    assert!(app.history().is_empty());

    let notices = app.take_notices();
    assert!(notices.iter().all(|n| matches!(n, Notice::Info(_))), "{:?}", notices);
    handle.abort();
}

#[tokio::test]
async fn unreachable_server_alerts_on_optimize() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut app = App::new(
        HttpApi::new(format!("http://{}/api", addr)),
        MemoryClipboard::new(),
    );
    app.mount().await;
    assert!(app.take_notices().is_empty());

    app.select_category("social_media");
    app.set_original_prompt("post about rust");
    app.optimize().await;
    assert_eq!(
        app.take_notices(),
        vec![Notice::Alert(
            "Error optimizing prompt. Please try again.".to_string()
        )]
    );
}
