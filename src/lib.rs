// ============================================================================
// FILE-BACKED BLOG API
// ============================================================================

// - Posts stored as one JSON document, rewritten on every change
// - Create, list, fetch and delete posts
// - Per-user likes with duplicate detection
// - Serialized writes and a global write rate limit
// - CORS, request timeouts and structured logging

pub mod config;
pub mod dto;
pub mod errors;
pub mod middleware;
pub mod models;
pub mod repository;
pub mod routes;
pub mod states;

pub use config::AppConfig;
pub use states::AppState;

use axum::{
    Router,
    error_handling::HandleErrorLayer,
    routing::{get, post},
};
use tower::{ServiceBuilder, limit::GlobalConcurrencyLimitLayer};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::routes::{
    create_post, delete_post, get_post, get_posts, health_check, like_post, unlike_post,
};

/// Routes and the write rate limit, without transport-level layers.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/posts", post(create_post).get(get_posts))
        .route("/posts/{id}", get(get_post).delete(delete_post))
        .route("/posts/{id}/likes", post(like_post).delete(unlike_post))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::limit_writes,
        ))
        .with_state(state)
}

/// The full service: routes plus timeout, concurrency limit, CORS and tracing.
pub fn app(state: AppState, config: &AppConfig) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router(state)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(middleware::handle_layer_error))
                .timeout(config.request_timeout)
                .layer(GlobalConcurrencyLimitLayer::new(
                    config.max_concurrent_requests,
                )),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
