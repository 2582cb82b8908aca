//! HTTP error handling for the tree API
//!
//! Maps the core error taxonomy onto transport status codes and renders a
//! consistent JSON error body. Internal failures get an opaque correlation
//! id that appears in both the response and the server log, so an operator
//! can find the logged detail from a caller's error report.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use treeline_core::TreeServiceError;
use uuid::Uuid;

/// JSON body returned for every failed request
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// User-facing error message
    pub message: String,
    /// Machine-readable error code
    pub code: String,
    /// Correlation id tying the response to the server log.
    /// Only present on internal (500-class) failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
}

impl ApiError {
    /// Create a new API error
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            correlation_id: None,
        }
    }

    /// Create an internal error with a fresh correlation id
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: "INTERNAL".to_string(),
            correlation_id: Some(Uuid::new_v4().to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.code.as_str() {
            "NOT_FOUND" => StatusCode::NOT_FOUND,
            "INVALID_ARGUMENT" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            let correlation_id = self.correlation_id.as_deref().unwrap_or("none");
            tracing::error!(
                "Unhandled failure - correlation id {}: {}",
                correlation_id,
                self.message
            );
        }

        (status, Json(self)).into_response()
    }
}

impl From<TreeServiceError> for ApiError {
    fn from(err: TreeServiceError) -> Self {
        let code = match &err {
            // the query naming a bad id is the caller's mistake
            TreeServiceError::UnknownId { .. } | TreeServiceError::CircularMove { .. } => {
                "INVALID_ARGUMENT"
            }
            // the mutation referenced a resource that is not there
            TreeServiceError::NodeNotFound { .. } | TreeServiceError::ParentNotFound { .. } => {
                "NOT_FOUND"
            }
        };
        ApiError::new(err.to_string(), code)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::internal(err.to_string())
    }
}
