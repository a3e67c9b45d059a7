//! Noughts server - tic-tac-toe over HTTP
//!
//! # Architecture
//!
//! - **API**: axum routes that create, fetch and play games
//! - **Config**: defaults, TOML file and command-line layers
//! - **Client**: typed HTTP client and the terminal front end built on it
//!
//! The rules, board summary, store and opponent live in
//! [`noughts_engine`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod api;
mod cli;
mod client;
mod config;
mod dto;
mod error;
pub mod play;
mod server;

pub use api::{AppState, HUMAN, router};
pub use cli::{Cli, Command};
pub use client::{ClientError, RestGameClient};
pub use config::{ConfigError, ConfigOverrides, OpponentKind, ServerConfig};
pub use dto::{ErrorBody, GameSummary, MoveRequest, NewGameResponse};
pub use error::ApiError;
pub use server::serve;
