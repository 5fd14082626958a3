mod requests;
mod responses;

pub use requests::{CreatePostRequest, LikeRequest};
pub use responses::{LikesResponse, SuccessResponse};
