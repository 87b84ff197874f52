#![allow(dead_code)]

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use filestore_api::AppConfig;
use reqwest::StatusCode;

pub const ADMIN_ID: &str = "1";
pub const USER_ID: &str = "2";

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    pub storage_root: PathBuf,
    _storage: tempfile::TempDir,
}

impl TestServer {
    pub fn logs_dir(&self) -> PathBuf {
        self.storage_root.join("logs")
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline { break; }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK || resp.status() == StatusCode::SERVICE_UNAVAILABLE {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }
}

/// Start a server on a free port with a fresh storage root. The server task
/// lives on the calling test's runtime and stops with it.
pub async fn spawn_server() -> Result<TestServer> {
    spawn_server_with(|_| {}).await
}

pub async fn spawn_server_with(configure: impl FnOnce(&mut AppConfig)) -> Result<TestServer> {
    let storage = tempfile::tempdir().context("failed to create storage dir")?;
    let storage_root = storage.path().join("storage");
    let port = portpicker::pick_unused_port().context("failed to pick free port")?;

    let mut config = AppConfig::default();
    config.server.host = "127.0.0.1".to_string();
    config.server.port = port;
    config.storage.root = storage_root.clone();
    config.api.enable_request_logging = false;
    configure(&mut config);

    tokio::spawn(async move {
        if let Err(e) = filestore_api::serve(config).await {
            eprintln!("test server exited: {e:#}");
        }
    });

    let server = TestServer {
        port,
        base_url: format!("http://127.0.0.1:{}", port),
        storage_root,
        _storage: storage,
    };
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}
