//! The `promptmaster` binary against an in-process API.

mod common;

use config::ServerSettings;
use promptmaster::MockLlm;
use tokio::process::Command;

async fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_promptmaster"))
        .args(args)
        .env_remove("LOG_FILE")
        .output()
        .await
        .expect("failed to run promptmaster binary")
}

#[tokio::test]
async fn help_lists_subcommands() {
    let out = run(&["--help"]).await;
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    for sub in ["serve", "categories", "templates", "history", "delete", "optimize", "client"] {
        assert!(stdout.contains(sub), "missing {} in {}", sub, stdout);
    }
}

#[tokio::test]
async fn categories_prints_table() {
    let (api, handle) = common::spawn_api(MockLlm::echo()).await;
    let out = run(&["categories", "--api-url", &api]).await;
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.lines().count(), 10);
    assert!(stdout.contains("📧 Email Templates"));
    handle.abort();
}

#[tokio::test]
async fn optimize_then_history_json() {
    let (api, handle) = common::spawn_api(MockLlm::fixed("Sharper prompt")).await;
    let out = run(&[
        "optimize",
        "--api-url",
        &api,
        "-c",
        "content_creation",
        "blog",
        "about",
        "rust",
    ])
    .await;
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "Sharper prompt");

    let out = run(&["history", "--json", "--api-url", &api]).await;
    assert!(out.status.success());
    let items: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["original_prompt"], "blog about rust");
    assert_eq!(items[0]["category"], "content_creation");
    handle.abort();
}

#[tokio::test]
async fn delete_unknown_id_fails() {
    let (api, handle) = common::spawn_api(MockLlm::echo()).await;
    let out = run(&["delete", "nope", "--api-url", &api]).await;
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("History item not found"), "{}", stderr);
    handle.abort();
}

#[tokio::test]
async fn history_limit_overrides_server_default() {
    let settings = ServerSettings {
        history_limit: 2,
        ..ServerSettings::default()
    };
    let (api, handle) = common::spawn_api_with(MockLlm::echo(), settings).await;
    for word in ["one", "two", "three", "four"] {
        let out = run(&["optimize", "--api-url", &api, "-c", "social_media", word]).await;
        assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    }

    let out = run(&["history", "-n", "4", "--json", "--api-url", &api]).await;
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let items: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[0]["original_prompt"], "four");

    let out = run(&["history", "--json", "--api-url", &api]).await;
    let items: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(items.as_array().unwrap().len(), 2);
    handle.abort();
}
