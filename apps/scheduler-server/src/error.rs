//! Server error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use datastore::StoreError;
use serde_json::json;

/// Machine-readable error codes returned in error bodies.
pub mod error_codes {
    pub const INVALID_REQUEST: &str = "invalid_request";
    pub const RESOURCE_NOT_FOUND: &str = "resource_not_found";
    pub const ACCESS_DENIED: &str = "access_denied";
    pub const INTERNAL_ERROR: &str = "internal_error";
}

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Invalid request parameters.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// No user matched the supplied credentials.
    #[error("Access denied")]
    AccessDenied,

    /// Store error.
    #[error("Datastore error: {0}")]
    Store(#[from] StoreError),
}

impl ServerError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ServerError::InvalidRequest(_) => {
                (StatusCode::BAD_REQUEST, error_codes::INVALID_REQUEST)
            }
            ServerError::AccessDenied => (StatusCode::FORBIDDEN, error_codes::ACCESS_DENIED),
            ServerError::Store(StoreError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, error_codes::RESOURCE_NOT_FOUND)
            }
            ServerError::Store(StoreError::Backend(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, error_codes::INTERNAL_ERROR)
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_code) = self.status_and_code();

        // Backend details stay in the log.
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
            "datastore error".to_string()
        } else {
            self.to_string()
        };

        let body = json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        });

        (status, Json(body)).into_response()
    }
}

/// Result type alias for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
