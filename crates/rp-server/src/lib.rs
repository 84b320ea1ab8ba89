//! HTTP server for the receipt processor.
//!
//! Accepts receipts as JSON, validates them, hands them to a
//! [`ReceiptStore`](rp_store::ReceiptStore) for scoring, and serves the
//! resulting points by id.
//!
//! | Method | Path                    | Response                |
//! |--------|-------------------------|-------------------------|
//! | POST   | `/receipts/process`     | `{"id": "..."}`         |
//! | GET    | `/receipts/{id}/points` | `{"points": N}` or 404  |
//! | GET    | `/v1/health`            | `{"status": "ok"}`      |
//! | GET    | `/v1/info`              | name and version        |

pub mod config;
pub mod dto;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;
pub mod validation;

pub use config::ServerConfig;
pub use dto::{HealthResponse, PointsResponse, ProcessResponse, ReceiptRequest};
pub use error::{ServerError, ServerResult};
pub use server::ReceiptServer;
pub use state::AppState;
pub use validation::validate_receipt;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::util::ServiceExt;

    use rp_store::{InMemoryReceiptStore, SequentialIdGenerator};

    fn app() -> Router {
        ReceiptServer::new(ServerConfig::default()).router()
    }

    fn target_receipt() -> Value {
        json!({
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [
                {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
                {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
                {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
                {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
                {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
            ],
            "total": "35.35"
        })
    }

    async fn post_json(app: &Router, body: String) -> (StatusCode, Value) {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/receipts/process")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        read(response).await
    }

    async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        read(response).await
    }

    async fn read(response: axum::response::Response) -> (StatusCode, Value) {
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn health_endpoint() {
        let (status, body) = get(&app(), "/v1/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn info_endpoint() {
        let (status, body) = get(&app(), "/v1/info").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "rp-server");
    }

    #[tokio::test]
    async fn process_then_get_points() {
        let app = app();
        let (status, body) = post_json(&app, target_receipt().to_string()).await;
        assert_eq!(status, StatusCode::OK);
        let id = body["id"].as_str().unwrap().to_string();
        assert!(!id.is_empty());

        let (status, body) = get(&app, &format!("/receipts/{id}/points")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["points"], 28);
    }

    #[tokio::test]
    async fn corner_market_scores_109() {
        let app = app();
        let receipt = json!({
            "retailer": "M&M Corner Market",
            "purchaseDate": "2022-03-20",
            "purchaseTime": "14:33",
            "items": [
                {"shortDescription": "Gatorade", "price": "2.25"},
                {"shortDescription": "Gatorade", "price": "2.25"},
                {"shortDescription": "Gatorade", "price": "2.25"},
                {"shortDescription": "Gatorade", "price": "2.25"}
            ],
            "total": "9.00"
        });
        let (_, body) = post_json(&app, receipt.to_string()).await;
        let id = body["id"].as_str().unwrap().to_string();
        let (_, body) = get(&app, &format!("/receipts/{id}/points")).await;
        assert_eq!(body["points"], 109);
    }

    #[tokio::test]
    async fn unknown_id_is_404() {
        let (status, body) = get(&app(), "/receipts/invalid-id/points").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
    }

    #[tokio::test]
    async fn missing_field_is_400() {
        let mut receipt = target_receipt();
        receipt.as_object_mut().unwrap().remove("purchaseDate");
        let (status, body) = post_json(&app(), receipt.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "missing required receipt fields");
    }

    #[tokio::test]
    async fn bad_time_is_400() {
        let mut receipt = target_receipt();
        receipt["purchaseTime"] = json!("1:01 PM");
        let (status, _) = post_json(&app(), receipt.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_json_is_400() {
        let (status, body) = post_json(&app(), "{not json".into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_receipt");
    }

    #[tokio::test]
    async fn body_is_json_regardless_of_content_type() {
        let app = app();
        for content_type in [None, Some("text/plain")] {
            let mut request = Request::builder().method("POST").uri("/receipts/process");
            if let Some(value) = content_type {
                request = request.header("content-type", value);
            }
            let response = app
                .clone()
                .oneshot(request.body(Body::from(target_receipt().to_string())).unwrap())
                .await
                .unwrap();
            let (status, body) = read(response).await;
            assert_eq!(status, StatusCode::OK, "{content_type:?}");
            assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
        }
    }

    #[tokio::test]
    async fn wrong_field_type_is_400() {
        let mut receipt = target_receipt();
        receipt["items"] = json!("not a list");
        let (status, _) = post_json(&app(), receipt.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn rejected_receipts_are_not_stored() {
        let store = Arc::new(InMemoryReceiptStore::new());
        let app = ReceiptServer::with_store(ServerConfig::default(), store.clone()).router();
        let mut receipt = target_receipt();
        receipt["total"] = json!("lots");
        let (status, _) = post_json(&app, receipt.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(rp_store::ReceiptStore::len(store.as_ref()).unwrap(), 0);
    }

    #[tokio::test]
    async fn injected_id_generator_shows_through() {
        let store = Arc::new(InMemoryReceiptStore::with_id_generator(SequentialIdGenerator::new("receipt")));
        let app = ReceiptServer::with_store(ServerConfig::default(), store).router();
        let (_, first) = post_json(&app, target_receipt().to_string()).await;
        let (_, second) = post_json(&app, target_receipt().to_string()).await;
        assert_eq!(first["id"], "receipt-1");
        assert_eq!(second["id"], "receipt-2");
    }

    #[tokio::test]
    async fn oversized_body_is_rejected() {
        let config = ServerConfig {
            max_body_bytes: 64,
            ..ServerConfig::default()
        };
        let app = ReceiptServer::new(config).router();
        let (status, _) = post_json(&app, target_receipt().to_string()).await;
        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn concurrent_submissions_keep_their_scores() {
        let app = app();
        let mut tasks = Vec::new();
        for n in 1..=20u32 {
            let app = app.clone();
            tasks.push(tokio::spawn(async move {
                let receipt = json!({
                    "retailer": "A".repeat(n as usize),
                    "purchaseDate": "2022-01-02",
                    "purchaseTime": "09:00",
                    "items": [],
                    "total": "1.01"
                });
                let (_, body) = post_json(&app, receipt.to_string()).await;
                (body["id"].as_str().unwrap().to_string(), n)
            }));
        }
        for task in tasks {
            let (id, expected) = task.await.unwrap();
            let (status, body) = get(&app, &format!("/receipts/{id}/points")).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["points"], expected);
        }
    }
}
