mod common;

use anyhow::Result;
use reqwest::StatusCode;

#[tokio::test]
async fn health_endpoint_responds() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK, "unexpected status: {}", res.status());

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["data"]["status"], "ok", "unexpected body: {}", body);
    assert_eq!(body["data"]["storage"], "ok", "unexpected body: {}", body);
    Ok(())
}

#[tokio::test]
async fn root_lists_file_endpoints() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let res = client.get(format!("{}/", server.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<serde_json::Value>().await?;
    assert!(body["success"].as_bool().unwrap_or(false), "success flag false or missing: {}", body);
    assert!(body["data"]["endpoints"].get("create").is_some(), "missing create endpoint: {}", body);
    Ok(())
}

#[tokio::test]
async fn startup_provisions_logs_and_backup() -> Result<()> {
    let server = common::spawn_server().await?;

    assert!(server.logs_dir().is_dir());
    assert!(server.storage_root.join("backup").is_dir());
    Ok(())
}
