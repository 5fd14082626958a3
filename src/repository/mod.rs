//! Storage for the post collection.
//!
//! The collection is always read and written as a whole. Callers that mutate
//! it must hold the application's write lock across the read and the write.

mod file;
mod memory;

pub use file::JsonFilePostRepository;
pub use memory::InMemoryPostRepository;

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Post;

/// Storage failures surfaced to callers. Reads never fail.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Failed to serialize posts: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write posts to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Returns the whole collection, newest first.
    async fn read_all(&self) -> Vec<Post>;

    /// Replaces the whole collection.
    async fn write_all(&self, posts: &[Post]) -> Result<(), RepoError>;

    async fn find_by_id(&self, id: &str) -> Option<Post> {
        self.read_all().await.into_iter().find(|p| p.id == id)
    }
}

/// Index of the post with `id`, by linear scan.
pub fn position_of(posts: &[Post], id: &str) -> Option<usize> {
    posts.iter().position(|p| p.id == id)
}
