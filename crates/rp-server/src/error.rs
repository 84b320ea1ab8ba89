use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid receipt format: {0}")]
    InvalidReceipt(String),

    #[error("{0}")]
    Validation(String),

    #[error("no receipt found for that id: {0}")]
    ReceiptNotFound(String),

    #[error("store error: {0}")]
    Store(#[from] rp_store::StoreError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidReceipt(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::ReceiptNotFound(_) => StatusCode::NOT_FOUND,
            Self::Store(_) | Self::Config(_) | Self::Io(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::InvalidReceipt(_) => "invalid_receipt",
            Self::Validation(_) => "validation_error",
            Self::ReceiptNotFound(_) => "not_found",
            Self::Store(_) => "store_error",
            Self::Config(_) => "config_error",
            Self::Io(_) | Self::Internal(_) => "internal_error",
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, %status, "request rejected");
        }
        let body = Json(ErrorBody {
            error: self.kind(),
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(ServerError::Validation("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ServerError::InvalidReceipt("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ServerError::ReceiptNotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ServerError::Store(rp_store::StoreError::LockPoisoned).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn response_carries_status() {
        let response = ServerError::ReceiptNotFound("abc".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
