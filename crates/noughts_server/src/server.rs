//! Binding and running the HTTP server.

use crate::api::{AppState, router};
use crate::config::ServerConfig;
use anyhow::Result;
use noughts_engine::GameStore;
use tokio::net::TcpListener;
use tracing::{info, instrument};

/// Serves the API until Ctrl+C.
#[instrument(skip(config), fields(address = %config.bind_address()))]
pub async fn serve(config: &ServerConfig) -> Result<()> {
    let state = AppState::new(GameStore::new(), config.opponent().build());
    let listener = TcpListener::bind(config.bind_address()).await?;
    info!(
        address = %listener.local_addr()?,
        opponent = %config.opponent(),
        "Server ready"
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
