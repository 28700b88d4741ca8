//! Local HTTP bridge for browser-side consumers.
//!
//! Adapts the message contract and the tab lifecycle notifications to HTTP:
//! - `POST /message` - `{type: "NETBAR_GET", url, tabId}` lookups
//! - `POST /tabs/{tab_id}/response` - top-level response headers of a tab
//! - `DELETE /tabs/{tab_id}` - tab closed
//! - `GET /health` - liveness and tracked tab count
//!
//! The server only binds to the loopback interface.

mod handlers;
mod types;

use std::future::Future;

use axum::routing::{delete, get, post};
use axum::Router;
use tokio::net::TcpListener;

use handlers::{health_handler, message_handler, tab_closed_handler, tab_response_handler};
pub use types::{BridgeState, HealthResponse, TabResponseEvent};

/// Builds the bridge router.
pub fn router(state: BridgeState) -> Router {
    Router::new()
        .route("/message", post(message_handler))
        .route("/tabs/{tab_id}/response", post(tab_response_handler))
        .route("/tabs/{tab_id}", delete(tab_closed_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Serves the bridge on an already bound listener until `shutdown` resolves.
pub async fn serve_bridge<F>(
    listener: TcpListener,
    state: BridgeState,
    shutdown: F,
) -> Result<(), anyhow::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| anyhow::anyhow!("Bridge server error: {}", e))
}

/// Binds `127.0.0.1:port` and serves the bridge until `shutdown` resolves.
pub async fn start_bridge_server<F>(
    port: u16,
    state: BridgeState,
    shutdown: F,
) -> Result<(), anyhow::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(format!("127.0.0.1:{}", port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind bridge server to port {}: {}", port, e))?;

    log::info!("Bridge listening on http://127.0.0.1:{}/", port);
    log::info!("  - Lookups: POST http://127.0.0.1:{}/message", port);
    log::info!("  - Health: GET http://127.0.0.1:{}/health", port);

    serve_bridge(listener, state, shutdown).await
}
