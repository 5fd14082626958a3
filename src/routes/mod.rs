mod health;
mod like;
mod post;

pub use health::health_check;
pub use like::{like_post, unlike_post};
pub use post::{create_post, delete_post, get_post, get_posts};
