use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use vitals_core::source::SourceError;
use vitals_dashboard::error::DashboardError;
use vitals_schemas::error::SchemaError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    /// The upstream sheet could not be read.
    BadGateway(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::BadGateway(msg) => {
                tracing::warn!("upstream error: {msg}");
                (StatusCode::BAD_GATEWAY, msg)
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<DashboardError> for ApiError {
    fn from(e: DashboardError) -> Self {
        match e {
            DashboardError::Source(SourceError::Fetch(msg)) => {
                ApiError::BadGateway(format!("fetch failed: {msg}"))
            }
            DashboardError::Schema(SchemaError::UnknownSchema(id)) => {
                ApiError::BadRequest(format!("unknown schema: {id}"))
            }
            // Configuration and mapping defects: fix the deployment or the
            // mapping table, never retry.
            other => ApiError::Internal(other.to_string()),
        }
    }
}
