use std::sync::Arc;

use promptmaster::MockLlm;
use serde_json::json;

use super::common;

#[tokio::test]
async fn optimize_returns_item_and_records_history() {
    let llm = Arc::new(MockLlm::fixed("  Write a formal email to the landlord.  "));
    let server = common::spawn_server(llm.clone()).await;

    let resp = server
        .http
        .post(server.api("/optimize"))
        .json(&json!({"original_prompt": "email landlord", "category": "email_templates"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let item: serde_json::Value = resp.json().await.unwrap();
    eprintln!("[e2e] optimize -> {}", item);
    assert_eq!(item["original_prompt"], "email landlord");
    assert_eq!(item["optimized_prompt"], "Write a formal email to the landlord.");
    assert_eq!(item["category"], "email_templates");
    assert!(item["id"].is_string());
    assert!(item["timestamp"].is_string());
    assert_eq!(llm.calls(), 1);

    let (_, history) = common::get_json(&server, &server.api("/history")).await;
    let history = history.as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["id"], item["id"]);
}

#[tokio::test]
async fn blank_prompt_is_rejected_without_llm_call() {
    let llm = Arc::new(MockLlm::echo());
    let server = common::spawn_server(llm.clone()).await;

    let resp = server
        .http
        .post(server.api("/optimize"))
        .json(&json!({"original_prompt": "   ", "category": "email_templates"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 422);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["detail"], "original prompt is empty");
    assert_eq!(llm.calls(), 0);
}

#[tokio::test]
async fn llm_failure_is_500_with_detail() {
    let server = common::spawn_server(Arc::new(MockLlm::failing("upstream timeout"))).await;

    let resp = server
        .http
        .post(server.api("/optimize"))
        .json(&json!({"original_prompt": "hi", "category": "social_media"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 500);
    let body: serde_json::Value = resp.json().await.unwrap();
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.starts_with("Error optimizing prompt:"), "{}", detail);
    assert!(detail.contains("upstream timeout"));

    let (_, history) = common::get_json(&server, &server.api("/history")).await;
    assert!(history.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn unconfigured_llm_reports_missing_key() {
    let server = common::spawn_server(Arc::new(serve::UnconfiguredLlm::new(
        "No LLM key found. Please set OPENAI_API_KEY or GEMINI_API_KEY",
    )))
    .await;
    let resp = server
        .http
        .post(server.api("/optimize"))
        .json(&json!({"original_prompt": "hi", "category": "social_media"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 500);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["detail"].as_str().unwrap().contains("No LLM key found"));
}
