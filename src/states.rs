use crate::{
    config::{AppConfig, StorageBackend},
    errors::ApiError,
    models::Post,
    repository::{InMemoryPostRepository, JsonFilePostRepository, PostRepository},
};
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use std::{num::NonZeroU32, sync::Arc};
use tokio::sync::Mutex;

// ============================================================================
// APPLICATION STATE - Shared data across all requests
// ============================================================================
/// `posts` is the only place the collection is read or written.
///
/// `write_lock` serializes every read-modify-write cycle so two concurrent
/// mutations cannot overwrite each other's changes.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    write_lock: Arc<Mutex<()>>,
    pub write_limiter: Option<Arc<DefaultDirectRateLimiter>>,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self {
            posts,
            write_lock: Arc::new(Mutex::new(())),
            write_limiter: None,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let posts: Arc<dyn PostRepository> = match &config.storage {
            StorageBackend::File(path) => Arc::new(JsonFilePostRepository::new(path.clone())),
            StorageBackend::Memory => Arc::new(InMemoryPostRepository::seeded()),
        };
        Self::new(posts).with_write_rate(config.write_rate_per_minute)
    }

    /// Caps mutating requests per minute. 0 leaves writes unthrottled.
    pub fn with_write_rate(mut self, per_minute: u32) -> Self {
        self.write_limiter = NonZeroU32::new(per_minute)
            .map(|n| Arc::new(RateLimiter::direct(Quota::per_minute(n))));
        self
    }

    /// Runs one read-modify-write cycle under the write lock.
    ///
    /// The cycle runs on its own task, so a caller that gives up (a request
    /// timeout) cannot release the lock while the write is still in flight.
    /// `apply` returning an error skips the write.
    pub async fn mutate<T, F>(&self, apply: F) -> Result<T, ApiError>
    where
        F: FnOnce(&mut Vec<Post>) -> Result<T, ApiError> + Send + 'static,
        T: Send + 'static,
    {
        let posts = self.posts.clone();
        let lock = self.write_lock.clone();

        tokio::spawn(async move {
            let _guard = lock.lock_owned().await;
            let mut all = posts.read_all().await;
            let out = apply(&mut all)?;
            posts.write_all(&all).await?;
            Ok::<T, ApiError>(out)
        })
        .await
        .map_err(|e| ApiError::InternalError(format!("Write task failed: {}", e)))?
    }
}
