//! API error type and its HTTP mapping.

use crate::dto::ErrorBody;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use derive_more::{Display, From};
use noughts_engine::{MoveError, MoveErrorClass};
use tracing::warn;

/// Everything a request handler can fail with.
#[derive(Debug, Display, From)]
pub enum ApiError {
    /// No game is stored under this identifier.
    #[display("Game {} not found", _0)]
    NotFound(String),

    /// The rules engine rejected the move.
    #[display("{}", _0)]
    Move(MoveError),

    /// The request body could not be decoded.
    #[display("{}", _0.body_text())]
    Body(JsonRejection),
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::NotFound(_) => None,
            ApiError::Move(e) => Some(e),
            ApiError::Body(e) => Some(e),
        }
    }
}

impl ApiError {
    /// Status code reported for this error.
    ///
    /// Bad input (unknown player, out-of-range tile, out of turn) is a 400;
    /// moves the board forbids (finished game, taken tile) are a 403.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Move(e) => match e.class() {
                MoveErrorClass::InvalidInput => StatusCode::BAD_REQUEST,
                MoveErrorClass::NotAllowed => StatusCode::FORBIDDEN,
            },
            ApiError::Body(e) => e.status(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(status = %status, error = %self, "Request rejected");
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
