//! Error types for the API server
//!
//! Every handler returns `Result<T>`; the `IntoResponse` impl below is the
//! only place where error kinds become HTTP status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;

// == API Error Enum ==
/// Unified error type for the API server.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Required request data was missing
    #[error("{0}")]
    InvalidRequest(String),

    /// Targeted row does not exist, or no rows were affected
    #[error("{0}")]
    NotFound(String),

    /// Any failure reported by the table store
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Database(err) => {
                error!(error = %err, "store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the API server.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let resp = ApiError::InvalidRequest("missing".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = ApiError::NotFound("gone".into()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = ApiError::Database(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_display_is_bare_message() {
        let err = ApiError::NotFound("The cohort with specified ID cannot be found".into());
        assert_eq!(
            err.to_string(),
            "The cohort with specified ID cannot be found"
        );
    }
}
