//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use reporthub_core::error::{AppError, ErrorKind};

/// Newtype over [`AppError`] that carries it across the Axum boundary.
///
/// Handlers return `Result<_, ApiError>`; the `From` impl lets `?` lift
/// any service or repository error straight into a response.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// The HTTP status and error code a kind maps to.
pub fn status_for_kind(kind: ErrorKind) -> (StatusCode, &'static str) {
    match kind {
        ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        ErrorKind::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
        ErrorKind::Forbidden => (StatusCode::FORBIDDEN, "FORBIDDEN"),
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        ErrorKind::Conflict => (StatusCode::CONFLICT, "CONFLICT"),
        ErrorKind::Database
        | ErrorKind::Configuration
        | ErrorKind::Storage
        | ErrorKind::Serialization
        | ErrorKind::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = status_for_kind(self.0.kind);

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(kind = %self.0.kind, error = %self.0.message, "Internal server error");
        }

        // Internal detail stays in the logs; the client gets a generic line.
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            "An internal error occurred".to_string()
        } else {
            self.0.message
        };

        let body = ApiErrorResponse {
            error: error_code.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_expected_statuses() {
        assert_eq!(status_for_kind(ErrorKind::Validation).0, StatusCode::BAD_REQUEST);
        assert_eq!(status_for_kind(ErrorKind::Unauthorized).0, StatusCode::UNAUTHORIZED);
        assert_eq!(status_for_kind(ErrorKind::Forbidden).0, StatusCode::FORBIDDEN);
        assert_eq!(status_for_kind(ErrorKind::NotFound).0, StatusCode::NOT_FOUND);
        assert_eq!(status_for_kind(ErrorKind::Conflict).0, StatusCode::CONFLICT);
        for kind in [
            ErrorKind::Database,
            ErrorKind::Configuration,
            ErrorKind::Storage,
            ErrorKind::Serialization,
            ErrorKind::Internal,
        ] {
            assert_eq!(status_for_kind(kind).0, StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
