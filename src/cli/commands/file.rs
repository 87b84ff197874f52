use anyhow::Context;
use serde_json::json;
use tokio::io::AsyncReadExt;

use crate::cli::client::FileClient;
use crate::cli::utils::{output_content, output_success};
use crate::cli::OutputFormat;

pub async fn put(
    client: &FileClient,
    filename: &str,
    content: Option<String>,
    output_format: &OutputFormat,
) -> anyhow::Result<()> {
    let content = match content {
        Some(content) => content,
        None => {
            let mut buffer = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buffer)
                .await
                .context("failed to read content from stdin")?;
            buffer
        }
    };

    let message = client.put(filename, &content).await?;
    output_success(output_format, &message, Some(json!({ "filename": filename })))
}

pub async fn get(client: &FileClient, filename: &str, output_format: &OutputFormat) -> anyhow::Result<()> {
    let content = client.get(filename).await?;
    output_content(output_format, &content)
}

pub async fn rm(client: &FileClient, filename: &str, output_format: &OutputFormat) -> anyhow::Result<()> {
    let message = client.remove(filename).await?;
    output_success(output_format, &message, Some(json!({ "filename": filename })))
}
