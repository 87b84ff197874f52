use crate::cli::client::FileClient;
use crate::cli::utils::output_value;
use crate::cli::OutputFormat;

pub async fn health(client: &FileClient, output_format: &OutputFormat) -> anyhow::Result<()> {
    let status = client.health().await?;
    output_value(output_format, &status)
}
