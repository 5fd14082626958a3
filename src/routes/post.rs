use crate::{
    AppState,
    dto::{CreatePostRequest, SuccessResponse},
    errors::ApiError,
    models::Post,
    repository::position_of,
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::info;
use validator::Validate;

/// POST /posts
/// Body: { "title": "...", "content": "...", "excerpt": "..."? }
pub async fn create_post(
    State(state): State<AppState>,
    payload: Result<Json<CreatePostRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::ValidationError(e.body_text()))?;
    payload
        .validate()
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;

    let post = Post::new(payload.title, payload.content, payload.excerpt);

    let new_post = post.clone();
    state
        .mutate(move |posts| {
            posts.insert(0, new_post);
            Ok(())
        })
        .await?;

    info!("Post created: {}", post.id);

    Ok((StatusCode::CREATED, Json(post)))
}

/// GET /posts
pub async fn get_posts(State(state): State<AppState>) -> Json<Vec<Post>> {
    Json(state.posts.read_all().await)
}

/// GET /posts/{id}
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Post>, ApiError> {
    let post = state.posts.find_by_id(&id).await.ok_or(ApiError::NotFound)?;

    Ok(Json(post))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let target = id.clone();
    state
        .mutate(move |posts| {
            let index = position_of(posts, &target).ok_or(ApiError::NotFound)?;
            posts.remove(index);
            Ok(())
        })
        .await?;

    info!("Post deleted: {}", id);

    Ok(Json(SuccessResponse { success: true }))
}
