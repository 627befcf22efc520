//! PR Assistant Server
//!
//! HTTP surface over the three tools, plus health and Prometheus metrics.

pub mod http;
pub mod metrics;
pub mod state;

pub use http::{create_router, SubmitRequest};
pub use metrics::{init_metrics, record_completion_latency, record_submission};
pub use state::AppState;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use pr_assistant_tools::UploadError;

/// Server errors
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Metrics are disabled")]
    MetricsDisabled,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ServerError> for StatusCode {
    fn from(err: ServerError) -> Self {
        match err {
            ServerError::UnknownTool(_) => StatusCode::BAD_REQUEST,
            ServerError::Upload(_) => StatusCode::BAD_REQUEST,
            ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::MetricsDisabled => StatusCode::NOT_FOUND,
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let status = StatusCode::from(self);
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
