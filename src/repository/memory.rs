use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{PostRepository, RepoError};
use crate::models::{Post, seed_posts};

/// Process-local collection. Data is lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }

    pub fn seeded() -> Self {
        Self::with_posts(seed_posts())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn read_all(&self) -> Vec<Post> {
        self.posts.read().await.clone()
    }

    async fn write_all(&self, posts: &[Post]) -> Result<(), RepoError> {
        *self.posts.write().await = posts.to_vec();
        Ok(())
    }
}
