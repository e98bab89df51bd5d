use std::sync::Arc;

use promptmaster::MockLlm;

use super::common;

#[tokio::test]
async fn root_reports_running() {
    let server = common::spawn_server(Arc::new(MockLlm::echo())).await;
    let url = format!("{}/", server.base);
    let (status, body) = common::get_json(&server, &url).await;
    assert_eq!(status, 200);
    assert_eq!(body["message"], "PromptMaster API is running");
}

#[tokio::test]
async fn categories_lists_all_ten_with_icons() {
    let server = common::spawn_server(Arc::new(MockLlm::echo())).await;
    let (status, body) = common::get_json(&server, &server.api("/categories")).await;
    assert_eq!(status, 200);
    let cats = body["categories"].as_array().unwrap();
    assert_eq!(cats.len(), 10);
    assert_eq!(cats[0]["id"], "text_summarization");
    assert_eq!(cats[0]["name"], "Text Summarization");
    assert_eq!(cats[0]["icon"], "📄");
    assert!(cats.iter().all(|c| c.get("guidance").is_none()));
}
