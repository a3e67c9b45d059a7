//! Command-line interface for noughts.

use crate::config::{ConfigOverrides, OpponentKind};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts - play tic-tac-toe against the computer over HTTP
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe game server and terminal client", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game server
    Serve {
        /// TOML configuration file
        #[arg(short, long, env = "NOUGHTS_CONFIG")]
        config: Option<PathBuf>,

        /// Host to bind to
        #[arg(long, env = "NOUGHTS_HOST")]
        host: Option<String>,

        /// Port to bind to
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// Computer opponent
        #[arg(long, value_enum, env = "NOUGHTS_OPPONENT")]
        opponent: Option<OpponentKind>,

        /// Default tracing filter, used when RUST_LOG is unset
        #[arg(long, env = "NOUGHTS_LOG_FILTER")]
        log_filter: Option<String>,
    },

    /// Play in the terminal against a running server
    Play {
        /// Game server URL
        #[arg(long, env = "NOUGHTS_URL", default_value = "http://localhost:3001")]
        server_url: String,
    },
}

impl Command {
    /// Configuration overrides carried by `serve`; empty for other commands.
    pub fn overrides(&self) -> ConfigOverrides {
        match self {
            Command::Serve {
                host,
                port,
                opponent,
                log_filter,
                ..
            } => ConfigOverrides {
                host: host.clone(),
                port: *port,
                opponent: *opponent,
                log_filter: log_filter.clone(),
            },
            Command::Play { .. } => ConfigOverrides::default(),
        }
    }
}
