//! Server configuration.
//!
//! Values come from, lowest precedence first: built-in defaults, an optional
//! TOML file, then command-line flags (which clap also fills from the
//! environment).

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_engine::{FirstAvailable, Opponent, RandomOpponent};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Which computer opponent answers the human's moves.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum OpponentKind {
    /// Uniformly random legal moves.
    #[default]
    Random,
    /// Lowest-numbered free square; deterministic.
    FirstAvailable,
}

impl OpponentKind {
    /// Instantiates the opponent.
    pub fn build(self) -> Arc<dyn Opponent> {
        match self {
            OpponentKind::Random => Arc::new(RandomOpponent),
            OpponentKind::FirstAvailable => Arc::new(FirstAvailable),
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to bind.
    host: String,
    /// Port to bind.
    port: u16,
    /// Computer opponent.
    opponent: OpponentKind,
    /// Default tracing filter, used when `RUST_LOG` is unset.
    log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
            opponent: OpponentKind::default(),
            log_filter: "info,noughts_server=debug".to_string(),
        }
    }
}

/// Values supplied on the command line; `None` leaves the lower layer alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Address to bind.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// Computer opponent.
    pub opponent: Option<OpponentKind>,
    /// Default tracing filter.
    pub log_filter: Option<String>,
}

impl ServerConfig {
    /// Loads configuration from a TOML file. Missing keys keep their
    /// defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(host = %config.host, port = config.port, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, otherwise starts from defaults, then applies
    /// `overrides`.
    #[instrument(skip(path))]
    pub fn load(path: Option<&Path>, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(overrides))
    }

    /// Replaces every field that `overrides` sets.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(host) = overrides.host {
            self.host = host;
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(opponent) = overrides.opponent {
            self.opponent = opponent;
        }
        if let Some(log_filter) = overrides.log_filter {
            self.log_filter = log_filter;
        }
        self
    }

    /// `host:port` to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
