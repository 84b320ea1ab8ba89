use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::response::Json;
use serde_json::json;

use rp_types::ReceiptId;

use crate::dto::{HealthResponse, PointsResponse, ProcessResponse, ReceiptRequest};
use crate::error::{ServerError, ServerResult};
use crate::state::AppState;
use crate::validation::validate_receipt;

/// `POST /receipts/process`: validate, score and store a receipt.
///
/// The body is decoded as JSON whatever its `Content-Type` header says.
pub async fn process_receipt(
    State(state): State<AppState>,
    body: Bytes,
) -> ServerResult<Json<ProcessResponse>> {
    let request: ReceiptRequest = serde_json::from_slice(&body)
        .map_err(|e| ServerError::InvalidReceipt(e.to_string()))?;
    let receipt = validate_receipt(request)?;
    let id = state.store.submit(receipt)?;
    Ok(Json(ProcessResponse { id }))
}

/// `GET /receipts/{id}/points`
pub async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ServerResult<Json<PointsResponse>> {
    let id = ReceiptId::new(id);
    match state.store.lookup(&id)? {
        Some(points) => Ok(Json(PointsResponse { points })),
        None => Err(ServerError::ReceiptNotFound(id.into_inner())),
    }
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Info handler.
pub async fn info_handler() -> Json<serde_json::Value> {
    Json(json!({
        "name": "rp-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
