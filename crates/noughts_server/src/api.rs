//! HTTP routes for creating, fetching and playing games.
//!
//! | Method | Path             | Body            | Success            |
//! |--------|------------------|-----------------|--------------------|
//! | POST   | `/api/game`      |                 | 201 `{id, tiles}`  |
//! | GET    | `/api/game/{id}` |                 | 200 `{id, tiles, winner}` |
//! | POST   | `/api/game/{id}` | `{"tileId": n}` | 200 `{id, tiles, winner}` |
//!
//! The human always plays X; the computer answers as O within the same
//! request.

use crate::dto::{GameSummary, MoveRequest, NewGameResponse};
use crate::error::ApiError;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use derive_getters::Getters;
use noughts_engine::{GameStore, Opponent, Player, lock};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, instrument};

/// The side the human plays.
pub const HUMAN: Player = Player::X;

/// Shared state handed to every handler.
#[derive(Debug, Clone, Getters, derive_new::new)]
pub struct AppState {
    /// Live games.
    store: GameStore,
    /// Plays the computer's side.
    opponent: Arc<dyn Opponent>,
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/game", post(create_game))
        .route("/api/game/{id}", get(fetch_game).post(make_move))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

/// Starts a new game.
#[instrument(skip(state))]
async fn create_game(State(state): State<AppState>) -> (StatusCode, Json<NewGameResponse>) {
    let (id, game) = state.store().create();
    let tiles = lock(&game).tiles();
    info!(game_id = %id, "Started new game");
    (
        StatusCode::CREATED,
        Json(NewGameResponse {
            id: id.to_string(),
            tiles,
        }),
    )
}

/// Returns the current board and winner.
#[instrument(skip(state))]
async fn fetch_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GameSummary>, ApiError> {
    let shared = state
        .store()
        .get(&id)
        .ok_or_else(|| ApiError::NotFound(id.clone()))?;
    let game = lock(&shared);
    Ok(Json(GameSummary::new(id, &game)))
}

/// Plays the human's move, then the computer's reply.
///
/// The game stays locked for the whole exchange so concurrent requests
/// against one game are applied one after another.
#[instrument(skip(state, body))]
async fn make_move(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<GameSummary>, ApiError> {
    let Json(request) = body?;
    let shared = state
        .store()
        .get(&id)
        .ok_or_else(|| ApiError::NotFound(id.clone()))?;

    let mut game = lock(&shared);
    game.register_move(HUMAN, request.tile_id)?;
    let reply = state.opponent().play(&mut game)?;
    debug!(game_id = %id, tile = request.tile_id, ?reply, "Exchanged moves");

    Ok(Json(GameSummary::new(id, &game)))
}
