mod chat_cmd;
mod config_cmd;
mod format_cmd;
mod serve_cmd;
mod status_cmd;
mod terminal_output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::instrument::WithSubscriber;

use clawchat_config::defaults::DEFAULT_LOG_LEVEL;
use clawchat_config::{config_dir, config_file_path, load_and_prepare};
use logging::LoggerOptions;

#[derive(Parser)]
#[command(name = "clawchat")]
#[command(about = "ClawChat: a small chatbot gateway with a terminal client")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ~/.clawchat/config.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the chat gateway
    Serve {
        /// Port to bind the HTTP server to
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Chat with a running gateway from the terminal
    Chat {
        /// Gateway base URL
        #[arg(long)]
        endpoint: Option<String>,
        /// Save the conversation as HTML on exit
        #[arg(long)]
        transcript: Option<PathBuf>,
    },
    /// Render markdown from a file or stdin as reply HTML
    Format {
        file: Option<PathBuf>,
    },
    /// Show whether a gateway is running
    Status {
        /// Gateway base URL
        #[arg(long)]
        endpoint: Option<String>,
    },
    /// Print the effective configuration with secrets masked
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let path = cli
        .config
        .clone()
        .unwrap_or_else(|| config_file_path(&config_dir()));
    // Config problems are logged while loading, before the configured logger exists.
    let (config, report) = load_and_prepare(&path)
        .with_subscriber(logging::bootstrap_dispatch(DEFAULT_LOG_LEVEL))
        .await?;

    logging::init_logger(&LoggerOptions {
        level: config.logging.level().to_string(),
        json: config.logging.json(),
        log_dir: config.logging.dir.as_ref().map(PathBuf::from),
    })
    .context("Failed to initialise logging")?;

    match cli.command {
        Commands::Serve { port } => serve_cmd::run(config, &report, port).await,
        Commands::Chat {
            endpoint,
            transcript,
        } => {
            let endpoint = endpoint.unwrap_or_else(|| config.client.endpoint().to_string());
            chat_cmd::run(&endpoint, config.client.timeout_secs(), transcript).await
        }
        Commands::Format { file } => format_cmd::run(file).await,
        Commands::Status { endpoint } => {
            let endpoint = endpoint.unwrap_or_else(|| config.client.endpoint().to_string());
            status_cmd::run(&endpoint).await
        }
        Commands::Config { init } => config_cmd::run(&config, &path, init).await,
    }
}
