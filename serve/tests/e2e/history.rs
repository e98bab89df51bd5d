use std::sync::Arc;

use promptmaster::MockLlm;
use serde_json::json;

use super::common;

async fn optimize(server: &common::TestServer, prompt: &str) -> String {
    let item: serde_json::Value = server
        .http
        .post(server.api("/optimize"))
        .json(&json!({"original_prompt": prompt, "category": "data_analysis"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    item["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn history_is_newest_first_and_honours_limit() {
    let server = common::spawn_server(Arc::new(MockLlm::echo())).await;
    let a = optimize(&server, "first").await;
    let b = optimize(&server, "second").await;
    let c = optimize(&server, "third").await;

    let (_, body) = common::get_json(&server, &server.api("/history")).await;
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, [c.as_str(), b.as_str(), a.as_str()]);

    let (_, limited) = common::get_json(&server, &server.api("/history?limit=2")).await;
    assert_eq!(limited.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn default_limit_comes_from_settings() {
    let settings = config::ServerSettings {
        history_limit: 1,
        ..common::in_memory_settings()
    };
    let server = common::spawn_server_with(Arc::new(MockLlm::echo()), settings).await;
    optimize(&server, "one").await;
    optimize(&server, "two").await;
    let (_, body) = common::get_json(&server, &server.api("/history")).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn delete_removes_exactly_that_item() {
    let server = common::spawn_server(Arc::new(MockLlm::echo())).await;
    let keep = optimize(&server, "keep me").await;
    let drop_id = optimize(&server, "drop me").await;

    let resp = server
        .http
        .delete(server.api(&format!("/history/{}", drop_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "History item deleted successfully");

    let (_, list) = common::get_json(&server, &server.api("/history")).await;
    let ids: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, [keep.as_str()]);
}

#[tokio::test]
async fn delete_unknown_id_is_404() {
    let server = common::spawn_server(Arc::new(MockLlm::echo())).await;
    let resp = server
        .http
        .delete(server.api("/history/does-not-exist"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 404);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["detail"], "History item not found");
}
