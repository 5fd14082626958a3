use serde::Serialize;

/// Body of a successful delete.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Body of a successful like or unlike: the post's like set afterwards.
#[derive(Debug, Serialize)]
pub struct LikesResponse {
    pub success: bool,
    pub likes: Vec<String>,
}

impl LikesResponse {
    pub fn new(likes: Vec<String>) -> Self {
        Self {
            success: true,
            likes,
        }
    }
}
