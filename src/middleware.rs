use axum::{
    BoxError,
    extract::{Request, State},
    http::{Method, StatusCode},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::{AppState, errors::ApiError};

/// Rejects mutating requests once the global write quota is spent.
pub async fn limit_writes(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let is_read = matches!(*req.method(), Method::GET | Method::HEAD | Method::OPTIONS);

    if let Some(limiter) = state.write_limiter.as_ref().filter(|_| !is_read) {
        if limiter.check().is_err() {
            warn!("Write rate limit hit: {} {}", req.method(), req.uri().path());
            return Err(ApiError::TooManyRequests);
        }
    }

    Ok(next.run(req).await)
}

/// Maps errors from the tower timeout/limit layers to responses.
pub async fn handle_layer_error(err: BoxError) -> (StatusCode, String) {
    if err.is::<tower::timeout::error::Elapsed>() {
        (StatusCode::REQUEST_TIMEOUT, "Request timed out".to_string())
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Unhandled internal error: {err}"),
        )
    }
}
