use anyhow::Context;
use reqwest::{RequestBuilder, Response, Url};
use serde_json::Value;
use thiserror::Error;

use crate::handlers::files::{CreateFileRequest, FileContent, FileMessage};

/// Non-success answer from the server
#[derive(Debug, Error)]
#[error("server returned {status}: {message}")]
pub struct ApiFailure {
    pub status: u16,
    pub message: String,
}

/// Thin HTTP client for the file endpoints
#[derive(Debug, Clone)]
pub struct FileClient {
    http: reqwest::Client,
    base_url: Url,
    identity_header: String,
    user_id: Option<String>,
}

impl FileClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url).with_context(|| format!("invalid server URL '{}'", base_url))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("server URL '{}' cannot be used as a base", base_url);
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            identity_header: crate::config::DEFAULT_IDENTITY_HEADER.to_string(),
            user_id: None,
        })
    }

    pub fn with_identity(mut self, header: impl Into<String>, user_id: Option<String>) -> Self {
        self.identity_header = header.into();
        self.user_id = user_id;
        self
    }

    pub async fn put(&self, filename: &str, content: &str) -> anyhow::Result<String> {
        let body = CreateFileRequest {
            filename: filename.to_string(),
            content: content.to_string(),
        };
        let request = self.http.post(self.url(&["api", "files"])).json(&body);
        let message: FileMessage = parse(self.send(request).await?).await?;
        Ok(message.message)
    }

    pub async fn get(&self, filename: &str) -> anyhow::Result<String> {
        let request = self.http.get(self.url(&["api", "files", filename]));
        let file: FileContent = parse(self.send(request).await?).await?;
        Ok(file.content)
    }

    pub async fn remove(&self, filename: &str) -> anyhow::Result<String> {
        let request = self.http.delete(self.url(&["api", "files", filename]));
        let message: FileMessage = parse(self.send(request).await?).await?;
        Ok(message.message)
    }

    pub async fn health(&self) -> anyhow::Result<Value> {
        let request = self.http.get(self.url(&["health"]));
        parse(self.send(request).await?).await
    }

    /// Segments are percent-encoded, so a filename containing `/` stays a
    /// single path segment.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send(&self, request: RequestBuilder) -> anyhow::Result<Response> {
        let request = match &self.user_id {
            Some(id) => request.header(self.identity_header.as_str(), id.as_str()),
            None => request,
        };
        request
            .send()
            .await
            .with_context(|| format!("failed to reach {}", self.base_url))
    }
}

async fn parse<T: serde::de::DeserializeOwned>(response: Response) -> anyhow::Result<T> {
    let status = response.status();
    if status.is_success() {
        return response.json::<T>().await.context("unexpected response body");
    }

    let message = response
        .json::<Value>()
        .await
        .ok()
        .and_then(|body| body.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());

    Err(ApiFailure {
        status: status.as_u16(),
        message,
    }
    .into())
}
