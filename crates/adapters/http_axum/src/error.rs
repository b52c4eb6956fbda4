//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use casualtydash_domain::error::{DashboardError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`DashboardError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(DashboardError);

impl From<DashboardError> for ApiError {
    fn from(err: DashboardError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DashboardError::Validation(err @ ValidationError::UnknownCategory(_)) => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            DashboardError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            DashboardError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            DashboardError::PermissionDenied(err) => {
                tracing::error!(error = %err, "permission denied");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            DashboardError::Source(err) => {
                tracing::error!(error = %err, "asset source error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
