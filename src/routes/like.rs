use crate::{
    AppState,
    dto::{LikeRequest, LikesResponse},
    errors::ApiError,
    repository::position_of,
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use tracing::info;
use validator::Validate;

fn require_user_id(payload: Result<Json<LikeRequest>, JsonRejection>) -> Result<String, ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::ValidationError(e.body_text()))?;
    payload
        .validate()
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;
    Ok(payload.user_id)
}

/// POST /posts/{id}/likes
/// Body: { "userId": "..." }
pub async fn like_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<LikeRequest>, JsonRejection>,
) -> Result<Json<LikesResponse>, ApiError> {
    let user_id = require_user_id(payload)?;

    let (target, user) = (id.clone(), user_id.clone());
    let likes = state
        .mutate(move |posts| {
            let index = position_of(posts, &target).ok_or(ApiError::NotFound)?;
            let post = &mut posts[index];
            if !post.add_like(&user) {
                return Err(ApiError::Conflict("Post already liked".to_string()));
            }
            Ok(post.like_list())
        })
        .await?;

    info!("Post {} liked by {}", id, user_id);

    Ok(Json(LikesResponse::new(likes)))
}

/// DELETE /posts/{id}/likes
/// Body: { "userId": "..." }
pub async fn unlike_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<LikeRequest>, JsonRejection>,
) -> Result<Json<LikesResponse>, ApiError> {
    let user_id = require_user_id(payload)?;

    let (target, user) = (id.clone(), user_id.clone());
    let likes = state
        .mutate(move |posts| {
            let index = position_of(posts, &target).ok_or(ApiError::NotFound)?;
            let post = &mut posts[index];
            if !post.remove_like(&user) {
                return Err(ApiError::Conflict("Post not liked yet".to_string()));
            }
            Ok(post.like_list())
        })
        .await?;

    info!("Post {} unliked by {}", id, user_id);

    Ok(Json(LikesResponse::new(likes)))
}
