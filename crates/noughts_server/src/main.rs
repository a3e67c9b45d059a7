//! Noughts - unified CLI
//!
//! Runs the game server or the terminal client.

use anyhow::Result;
use clap::Parser;
use noughts_server::{Cli, Command, ServerConfig, play, serve};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let overrides = cli.command.overrides();

    match cli.command {
        Command::Serve { config, .. } => {
            let config = ServerConfig::load(config.as_deref(), overrides)?;
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
                )
                .init();
            info!(?config, "Starting noughts server");
            serve(&config).await
        }
        Command::Play { server_url } => {
            // Keep the board readable: logs go to stderr and default to warnings.
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                )
                .with_writer(std::io::stderr)
                .init();
            play::run(server_url).await
        }
    }
}
