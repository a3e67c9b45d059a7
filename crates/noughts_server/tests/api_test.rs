//! Tests for the HTTP API.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use noughts_engine::{FirstAvailable, GameStore, Player, Position, RandomOpponent, lock};
use noughts_server::{AppState, ErrorBody, GameSummary, NewGameResponse, router};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tower::ServiceExt;

/// App whose computer always takes the lowest free tile.
fn app() -> (GameStore, Router) {
    let store = GameStore::new();
    let state = AppState::new(store.clone(), Arc::new(FirstAvailable));
    (store, router(state))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

fn parse<T: DeserializeOwned>(body: &[u8]) -> T {
    serde_json::from_slice(body)
        .unwrap_or_else(|e| panic!("bad body {:?}: {e}", String::from_utf8_lossy(body)))
}

async fn create(app: &Router) -> NewGameResponse {
    let (status, body) = send(
        app,
        Request::builder()
            .method("POST")
            .uri("/api/game")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    parse(&body)
}

async fn fetch(app: &Router, id: &str) -> (StatusCode, Vec<u8>) {
    send(
        app,
        Request::builder()
            .uri(format!("/api/game/{id}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

async fn post_json(app: &Router, id: &str, json: &str) -> (StatusCode, Vec<u8>) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(format!("/api/game/{id}"))
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
    )
    .await
}

async fn play_tile(app: &Router, id: &str, tile: i64) -> (StatusCode, Vec<u8>) {
    post_json(app, id, &format!(r#"{{"player": "X", "tileId": {tile}}}"#)).await
}

#[tokio::test]
async fn test_health() {
    let (_, app) = app();
    let (status, body) = send(&app, Request::builder().uri("/health").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");
}

#[tokio::test]
async fn test_create_returns_id_and_empty_tiles() {
    let (store, app) = app();
    let (status, body) = send(
        &app,
        Request::builder()
            .method("POST")
            .uri("/api/game")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let json: serde_json::Value = parse(&body);
    assert!(json["id"].is_string());
    assert!(json.get("winner").is_none());
    let tiles = json["tiles"].as_array().unwrap();
    assert_eq!(tiles.len(), 9);
    for (i, tile) in tiles.iter().enumerate() {
        assert_eq!(tile, &serde_json::json!({ "id": i + 1 }));
    }
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_fetch_existing_game() {
    let (_, app) = app();
    let game = create(&app).await;

    let (status, body) = fetch(&app, &game.id).await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = parse(&body);
    assert_eq!(json["id"], game.id.as_str());
    assert!(json["winner"].is_null());
    assert_eq!(json["tiles"].as_array().unwrap().len(), 9);
}

#[tokio::test]
async fn test_unknown_game_is_404() {
    let (_, app) = app();

    let (status, body) = fetch(&app, "nonexistent").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: ErrorBody = parse(&body);
    assert_eq!(error.error, "Game nonexistent not found");

    let (status, _) = play_tile(&app, "nonexistent", 1).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_uppercase_id_is_404() {
    let (_, app) = app();
    let game = create(&app).await;

    let (status, _) = fetch(&app, &game.id.to_uppercase()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = play_tile(&app, &game.id.replace('-', ""), 1).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_move_gets_computer_reply() {
    let (store, app) = app();
    let game = create(&app).await;

    let (status, body) = play_tile(&app, &game.id, 5).await;

    assert_eq!(status, StatusCode::OK);
    let summary: GameSummary = parse(&body);
    assert_eq!(summary.id, game.id);
    assert_eq!(summary.winner, None);
    assert_eq!(summary.tiles.get(Position::Center).value, Some(Player::X));
    assert_eq!(summary.tiles.get(Position::TopLeft).value, Some(Player::O));

    let shared = store.get(&game.id).unwrap();
    assert_eq!(lock(&shared).current_player(), Some(Player::X));
}

#[tokio::test]
async fn test_human_wins() {
    let (_, app) = app();
    let game = create(&app).await;

    // Computer answers with 1, then 2.
    for tile in [5, 9] {
        let (status, _) = play_tile(&app, &game.id, tile).await;
        assert_eq!(status, StatusCode::OK);
    }
    // Block the top row; computer answers with 4.
    let (status, body) = play_tile(&app, &game.id, 3).await;
    assert_eq!(status, StatusCode::OK);
    let summary: GameSummary = parse(&body);
    assert_eq!(summary.winner, None);

    // Complete the 3-5-7 diagonal.
    let (status, body) = play_tile(&app, &game.id, 7).await;
    assert_eq!(status, StatusCode::OK);
    let summary: GameSummary = parse(&body);
    assert_eq!(summary.winner, Some(Player::X));

    let (status, body) = fetch(&app, &game.id).await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = parse(&body);
    assert_eq!(json["winner"], "X");
}

#[tokio::test]
async fn test_move_after_game_over_is_403() {
    let (_, app) = app();
    let game = create(&app).await;
    for tile in [5, 9, 3, 7] {
        play_tile(&app, &game.id, tile).await;
    }

    let (status, body) = play_tile(&app, &game.id, 8).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    let error: ErrorBody = parse(&body);
    assert_eq!(error.error, "The game is already over");
}

#[tokio::test]
async fn test_taken_tile_is_403_with_available_list() {
    let (store, app) = app();
    let game = create(&app).await;
    play_tile(&app, &game.id, 5).await;
    let before = lock(&store.get(&game.id).unwrap()).clone();

    let (status, body) = play_tile(&app, &game.id, 1).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    let error: ErrorBody = parse(&body);
    assert_eq!(
        error.error,
        "The position is unavailable, available positions are: 2, 3, 4, 6, 7, 8, 9"
    );
    assert_eq!(*lock(&store.get(&game.id).unwrap()), before);
}

#[tokio::test]
async fn test_out_of_range_tile_is_400() {
    let (_, app) = app();
    let game = create(&app).await;

    for tile in [0, 10, -4] {
        let (status, body) = play_tile(&app, &game.id, tile).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ErrorBody = parse(&body);
        assert_eq!(error.error, "Only positions between 1 and 9 are valid");
    }
}

#[tokio::test]
async fn test_malformed_body_is_rejected_with_json_error() {
    let (_, app) = app();
    let game = create(&app).await;

    let (status, body) = post_json(&app, &game.id, r#"{"tile": 1}"#).await;
    assert!(status.is_client_error());
    let error: ErrorBody = parse(&body);
    assert!(!error.error.is_empty());

    let (status, _) = send(
        &app,
        Request::builder()
            .method("POST")
            .uri(format!("/api/game/{}", game.id))
            .body(Body::from("tileId=1"))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_games_are_independent() {
    let (store, app) = app();
    let first = create(&app).await;
    let second = create(&app).await;
    assert_ne!(first.id, second.id);

    play_tile(&app, &first.id, 5).await;

    let (_, body) = fetch(&app, &second.id).await;
    let summary: GameSummary = parse(&body);
    assert!(summary.tiles.iter().all(|t| t.value.is_none()));
    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn test_random_opponent_full_game_finishes() {
    let store = GameStore::new();
    let app = router(AppState::new(store.clone(), Arc::new(RandomOpponent)));
    let game = create(&app).await;

    let mut summary: Option<GameSummary> = None;
    for _ in 0..5 {
        let free = match &summary {
            Some(s) => s.tiles.empty_positions(),
            None => Position::ALL.to_vec(),
        };
        if summary.as_ref().is_some_and(|s| s.winner.is_some()) || free.is_empty() {
            break;
        }
        let (status, body) = play_tile(&app, &game.id, i64::from(free[0].number())).await;
        assert_eq!(status, StatusCode::OK);
        summary = Some(parse(&body));
    }

    let shared = store.get(&game.id).unwrap();
    assert!(lock(&shared).is_over());
}
