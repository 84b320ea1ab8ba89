use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use rp_store::ReceiptStore;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// Receipt processor HTTP server.
///
/// Owns the one store instance that every request handler shares.
pub struct ReceiptServer {
    config: ServerConfig,
    state: AppState,
}

impl ReceiptServer {
    /// Server backed by a fresh in-memory store.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            state: AppState::in_memory(),
        }
    }

    pub fn with_store(config: ServerConfig, store: Arc<dyn ReceiptStore>) -> Self {
        Self {
            config,
            state: AppState::new(store),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Build the router with tracing and body limit layers (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone())
            .layer(DefaultBodyLimit::max(self.config.max_body_bytes))
            .layer(TraceLayer::new_for_http())
    }

    /// Start serving requests until Ctrl-C.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("receipt processor listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutdown signal received");
}
