pub mod client;
pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_IDENTITY_HEADER;
use client::FileClient;

#[derive(Parser)]
#[command(name = "filestore")]
#[command(about = "Filestore CLI - command-line client for the Filestore API")]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "FILESTORE_URL",
        default_value = "http://localhost:3000",
        help = "Base URL of the Filestore API"
    )]
    pub server: String,

    #[arg(long, global = true, env = "FILESTORE_USER_ID", help = "User id sent in the identity header")]
    pub user_id: Option<String>,

    #[arg(
        long,
        global = true,
        env = "SECURITY_IDENTITY_HEADER",
        default_value = DEFAULT_IDENTITY_HEADER,
        help = "Identity header name"
    )]
    pub identity_header: String,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Upload a file (content from argument or stdin)")]
    Put {
        #[arg(help = "Filename under the logs directory")]
        filename: String,
        #[arg(help = "File content; read from stdin when omitted")]
        content: Option<String>,
    },

    #[command(about = "Print a file's content")]
    Get {
        #[arg(help = "Filename under the logs directory")]
        filename: String,
    },

    #[command(about = "Delete a file")]
    Rm {
        #[arg(help = "Filename under the logs directory")]
        filename: String,
    },

    #[command(about = "Check server health status")]
    Health,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let client = FileClient::new(&cli.server)?
        .with_identity(cli.identity_header.clone(), cli.user_id.clone());

    match cli.command {
        Commands::Put { filename, content } => commands::put(&client, &filename, content, &output_format).await,
        Commands::Get { filename } => commands::get(&client, &filename, &output_format).await,
        Commands::Rm { filename } => commands::rm(&client, &filename, &output_format).await,
        Commands::Health => commands::health(&client, &output_format).await,
    }
}
