mod post;

pub use post::{EXCERPT_LENGTH, Post, make_excerpt, new_post_id, seed_posts};
