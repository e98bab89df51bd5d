use std::sync::Arc;

use promptmaster::MockLlm;

use super::common;

#[tokio::test]
async fn templates_are_seeded() {
    let server = common::spawn_server(Arc::new(MockLlm::echo())).await;
    let (status, body) = common::get_json(&server, &server.api("/templates")).await;
    assert_eq!(status, 200);
    let all = body.as_array().unwrap();
    assert_eq!(all.len(), 10);
    for t in all {
        assert!(t["id"].is_string());
        assert!(t["template"].as_str().map_or(false, |s| !s.is_empty()));
    }
}

#[tokio::test]
async fn templates_filter_by_category() {
    let server = common::spawn_server(Arc::new(MockLlm::echo())).await;
    let (status, body) =
        common::get_json(&server, &server.api("/templates?category=code_generation")).await;
    assert_eq!(status, 200);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["category"], "code_generation");
    assert_eq!(list[0]["title"], "Function Generator");

    let (_, none) = common::get_json(&server, &server.api("/templates?category=nope")).await;
    assert!(none.as_array().unwrap().is_empty());

    let (_, empty_filter) = common::get_json(&server, &server.api("/templates?category=")).await;
    assert_eq!(empty_filter.as_array().unwrap().len(), 10);
}
