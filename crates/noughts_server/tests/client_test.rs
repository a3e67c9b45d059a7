//! Tests for the HTTP client against a live server.

use noughts_engine::{FirstAvailable, GameStore, Player, Position};
use noughts_server::{AppState, ClientError, RestGameClient, router};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Serves the API on an ephemeral port and returns its base URL.
async fn spawn_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    let app = router(AppState::new(GameStore::new(), Arc::new(FirstAvailable)));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{address}/")
}

#[tokio::test]
async fn test_new_game_fetch_and_move() {
    let client = RestGameClient::new(spawn_server().await);

    let game = client.new_game().await.unwrap();
    assert!(game.tiles.iter().all(|t| t.value.is_none()));

    let summary = client.make_move(&game.id, 5).await.unwrap();
    assert_eq!(summary.tiles.get(Position::Center).value, Some(Player::X));
    assert_eq!(summary.tiles.get(Position::TopLeft).value, Some(Player::O));

    let fetched = client.fetch(&game.id).await.unwrap();
    assert_eq!(fetched, summary);
}

#[tokio::test]
async fn test_server_errors_carry_message() {
    let client = RestGameClient::new(spawn_server().await);
    let game = client.new_game().await.unwrap();
    client.make_move(&game.id, 5).await.unwrap();

    match client.make_move(&game.id, 5).await {
        Err(ClientError::Server { status, message }) => {
            assert_eq!(status, 403);
            assert!(message.starts_with("The position is unavailable"));
        }
        other => panic!("expected server error, got {other:?}"),
    }

    match client.fetch("missing").await {
        Err(ClientError::Server { status, .. }) => assert_eq!(status, 404),
        other => panic!("expected not found, got {other:?}"),
    }
}
