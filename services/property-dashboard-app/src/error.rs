//! Error types for the property dashboard frontend

/// Errors that can occur while loading dashboard data
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("Store access failed: {0}")]
    StoreAccess(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Property list is empty")]
    EmptyPropertyList,
}

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;
