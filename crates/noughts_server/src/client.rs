//! HTTP client for the game API.

use crate::dto::{ErrorBody, GameSummary, MoveRequest, NewGameResponse};
use derive_more::{Display, From};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

/// Errors talking to the game server.
#[derive(Debug, Display, From)]
pub enum ClientError {
    /// The request never completed or the body was unreadable.
    #[display("HTTP error: {}", _0)]
    Http(reqwest::Error),

    /// The server answered with an error status.
    #[display("{}", message)]
    Server {
        /// HTTP status code.
        status: u16,
        /// Message from the server's error body.
        message: String,
    },
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Http(e) => Some(e),
            ClientError::Server { .. } => None,
        }
    }
}

/// Typed client for the REST API.
#[derive(Debug, Clone)]
pub struct RestGameClient {
    base_url: String,
    client: reqwest::Client,
}

impl RestGameClient {
    /// Creates a client for the server at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Starts a new game.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn new_game(&self) -> Result<NewGameResponse, ClientError> {
        let response = self
            .client
            .post(format!("{}/api/game", self.base_url))
            .send()
            .await?;
        let game: NewGameResponse = Self::decode(response).await?;
        info!(game_id = %game.id, "Started game");
        Ok(game)
    }

    /// Fetches the current state of a game.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn fetch(&self, id: &str) -> Result<GameSummary, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/game/{}", self.base_url, id))
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Claims `tile_id` as X; the reply includes the computer's answer.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn make_move(&self, id: &str, tile_id: i64) -> Result<GameSummary, ClientError> {
        let response = self
            .client
            .post(format!("{}/api/game/{}", self.base_url, id))
            .json(&MoveRequest { tile_id })
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let text = response.text().await?;
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or(text);
        debug!(status = status.as_u16(), %message, "Server returned error");
        Err(ClientError::Server {
            status: status.as_u16(),
            message,
        })
    }
}
