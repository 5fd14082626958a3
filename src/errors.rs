use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::repository::RepoError;

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    ValidationError(String),
    /// Like when already liked, unlike when not liked.
    Conflict(String),
    TooManyRequests,
    InternalError(String),
}

/// Convert our custom errors to HTTP responses
///
/// Every error body has the shape `{"error": "..."}`.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Post not found".to_string()),
            ApiError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            // Clients are expected to re-fetch the post, so this is a plain 400.
            ApiError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::TooManyRequests => (
                StatusCode::TOO_MANY_REQUESTS,
                "Too many requests".to_string(),
            ),
            ApiError::InternalError(msg) => {
                error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (
            status,
            Json(serde_json::json!({
              "error": message
            })),
        )
            .into_response()
    }
}

impl From<RepoError> for ApiError {
    fn from(err: RepoError) -> Self {
        ApiError::InternalError(err.to_string())
    }
}
