mod common;

use anyhow::Result;
use filestore_api::{AppConfig, AppState};
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn users_file_replaces_builtin_table() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let users_file = dir.path().join("users.json");
    std::fs::write(
        &users_file,
        json!([
            { "id": "ops", "email": "ops@example.com", "role": "admin" },
            { "id": "1", "email": "former-admin@example.com", "role": "user" }
        ])
        .to_string(),
    )?;

    let server = common::spawn_server_with(|config| {
        config.security.users_file = Some(users_file.clone());
    })
    .await?;
    let client = reqwest::Client::new();
    let url = format!("{}/api/files", server.base_url);
    let body = json!({ "filename": "a.txt", "content": "hi" });

    let res = client.post(&url).header("user-id", "1").json(&body).send().await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = client.post(&url).header("user-id", "ops").json(&body).send().await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    Ok(())
}

#[tokio::test]
async fn identity_header_is_configurable() -> Result<()> {
    let server = common::spawn_server_with(|config| {
        config.security.identity_header = "x-caller-id".to_string();
    })
    .await?;
    let client = reqwest::Client::new();
    let url = format!("{}/api/files", server.base_url);
    let body = json!({ "filename": "a.txt", "content": "hi" });

    let res = client.post(&url).header("user-id", "1").json(&body).send().await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = client.post(&url).header("x-caller-id", "1").json(&body).send().await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    Ok(())
}

#[tokio::test]
async fn unusable_storage_root_fails_lazily_by_default() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let blocker = dir.path().join("storage");
    std::fs::write(&blocker, "a file, not a directory")?;

    let mut config = AppConfig::default();
    config.storage.root = blocker.clone();
    assert!(AppState::from_config(&config).await.is_ok());

    config.storage.fail_fast = true;
    assert!(AppState::from_config(&config).await.is_err());

    Ok(())
}

#[tokio::test]
async fn lazy_storage_failure_surfaces_per_request() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let blocker = dir.path().join("blocked");
    std::fs::write(&blocker, "a file, not a directory")?;

    let server = common::spawn_server_with(|config| {
        config.storage.root = blocker.clone();
    })
    .await?;
    let client = reqwest::Client::new();

    let res = client.get(format!("{}/health", server.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);

    let res = client
        .post(format!("{}/api/files", server.base_url))
        .header("user-id", "1")
        .json(&json!({ "filename": "a.txt", "content": "hi" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
