use axum::routing::{get, post};
use axum::Router;

use crate::handler;
use crate::state::AppState;

/// Build the axum router with all receipt processor endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/receipts/process", post(handler::process_receipt))
        .route("/receipts/:id/points", get(handler::get_points))
        .route("/v1/health", get(handler::health_handler))
        .route("/v1/info", get(handler::info_handler))
        .with_state(state)
}
