//! Shared helpers for driving the router in-process.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use blog_api::{
    AppConfig, AppState, app,
    repository::{InMemoryPostRepository, PostRepository},
};
use serde_json::Value;
use tower::ServiceExt;

pub fn app_with(state: AppState) -> Router {
    app(state, &AppConfig::default())
}

/// App over an empty in-memory store, plus a handle on that store.
pub fn empty_app() -> (Router, Arc<InMemoryPostRepository>) {
    let repo = Arc::new(InMemoryPostRepository::new());
    let state = AppState::new(repo.clone() as Arc<dyn PostRepository>);
    (app_with(state), repo)
}

pub fn seeded_app() -> (Router, Arc<InMemoryPostRepository>) {
    let repo = Arc::new(InMemoryPostRepository::seeded());
    let state = AppState::new(repo.clone() as Arc<dyn PostRepository>);
    (app_with(state), repo)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        // Layer errors (timeouts) answer with plain text.
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, value)
}

pub async fn create(app: &Router, title: &str, content: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/posts",
        Some(serde_json::json!({ "title": title, "content": content })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {body}");
    body
}
