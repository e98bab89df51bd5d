use std::sync::Arc;

use config::CorsOrigins;
use promptmaster::MockLlm;

use super::common;

#[tokio::test]
async fn wildcard_cors_allows_any_origin() {
    let server = common::spawn_server(Arc::new(MockLlm::echo())).await;
    let resp = server
        .http
        .get(server.api("/categories"))
        .header("origin", "http://localhost:3000")
        .send()
        .await
        .unwrap();
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn listed_origin_is_echoed_with_credentials() {
    let settings = config::ServerSettings {
        cors_origins: CorsOrigins::List(vec!["http://localhost:3000".to_string()]),
        ..common::in_memory_settings()
    };
    let server = common::spawn_server_with(Arc::new(MockLlm::echo()), settings).await;
    let resp = server
        .http
        .get(server.api("/categories"))
        .header("origin", "http://localhost:3000")
        .send()
        .await
        .unwrap();
    let headers = resp.headers();
    assert_eq!(
        headers
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:3000")
    );
    assert_eq!(
        headers
            .get("access-control-allow-credentials")
            .and_then(|v| v.to_str().ok()),
        Some("true")
    );

    let other = server
        .http
        .get(server.api("/categories"))
        .header("origin", "http://evil.example")
        .send()
        .await
        .unwrap();
    assert!(other.headers().get("access-control-allow-origin").is_none());
}
