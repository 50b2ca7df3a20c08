use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::sync::Mutex;

use crate::{api, config, types::PkceState};

pub fn router(state: Arc<Mutex<Option<PkceState>>>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback).layer(Extension(state)))
}

/// Serves the OAuth callback routes on the configured address until the
/// task is aborted.
pub async fn start_api_server(state: Arc<Mutex<Option<PkceState>>>) -> Result<(), String> {
    let addr = SocketAddr::from_str(&config::server_addr())
        .map_err(|e| format!("Failed to parse server address: {e}"))?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("Failed to bind {addr}: {e}"))?;
    tracing::debug!(%addr, "Callback server listening");

    axum::serve(listener, router(state))
        .await
        .map_err(|e| e.to_string())
}
