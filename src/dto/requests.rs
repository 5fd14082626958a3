use serde::Deserialize;
use validator::Validate;

/// Missing and empty fields are both rejected by validation.
#[derive(Debug, Validate, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    pub excerpt: Option<String>,
}

#[derive(Debug, Validate, Deserialize)]
pub struct LikeRequest {
    #[serde(default, rename = "userId")]
    #[validate(length(min = 1, message = "User ID is required"))]
    pub user_id: String,
}
