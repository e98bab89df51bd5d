use std::sync::Arc;

use promptmaster::MockLlm;

use super::common;

#[tokio::test]
async fn malformed_body_gets_detail_not_500() {
    let llm = Arc::new(MockLlm::echo());
    let server = common::spawn_server(llm.clone()).await;

    let resp = server
        .http
        .post(server.api("/optimize"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    let status = resp.status().as_u16();
    assert!(status == 400 || status == 422, "status {}", status);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["detail"].is_string());
    assert_eq!(llm.calls(), 0);
}

#[tokio::test]
async fn missing_field_is_rejected() {
    let server = common::spawn_server(Arc::new(MockLlm::echo())).await;
    let resp = server
        .http
        .post(server.api("/optimize"))
        .json(&serde_json::json!({"original_prompt": "no category"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 422);
}

#[tokio::test]
async fn bad_limit_is_rejected() {
    let server = common::spawn_server(Arc::new(MockLlm::echo())).await;
    let resp = server
        .http
        .get(server.api("/history?limit=lots"))
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_client_error());
}
