//! Error types for the property dashboard service

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Errors that can occur in the property dashboard service
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Property {property_id} not found for tenant {tenant}")]
    PropertyNotFound { property_id: String, tenant: String },
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServiceError::PropertyNotFound { .. } => StatusCode::NOT_FOUND,
            e => {
                tracing::error!("Internal error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

/// Result type alias for service operations
pub type Result<T> = std::result::Result<T, ServiceError>;
