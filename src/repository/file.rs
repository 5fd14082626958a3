use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::NamedTempFile;
use tokio::{fs, sync::Mutex};
use tracing::{debug, warn};

use super::{PostRepository, RepoError};
use crate::models::{Post, seed_posts};

/// Keeps the collection in one pretty-printed JSON file.
///
/// Seeding and writing share `file_lock`, so a reader that finds the file
/// missing can never overwrite a collection written in the meantime.
#[derive(Debug)]
pub struct JsonFilePostRepository {
    path: PathBuf,
    file_lock: Mutex<()>,
}

impl JsonFilePostRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file_lock: Mutex::new(()),
        }
    }

    #[cfg(test)]
    fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, source: io::Error) -> RepoError {
        RepoError::Write {
            path: self.path.clone(),
            source,
        }
    }

    /// `None` when the file does not exist.
    async fn load(&self) -> Option<Vec<Post>> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(
                    "Failed to read {}, serving seed posts: {}",
                    self.path.display(),
                    e
                );
                return Some(seed_posts());
            }
        };

        match serde_json::from_str(&raw) {
            Ok(posts) => Some(posts),
            Err(e) => {
                warn!(
                    "Failed to parse {}, serving seed posts: {}",
                    self.path.display(),
                    e
                );
                Some(seed_posts())
            }
        }
    }

    /// Writes the seed set unless another caller created the file first.
    async fn seed(&self) -> Vec<Post> {
        let _guard = self.file_lock.lock().await;
        if let Some(posts) = self.load().await {
            return posts;
        }

        let seed = seed_posts();
        match self.replace(&seed).await {
            Ok(()) => debug!("Seeded post store at {}", self.path.display()),
            Err(e) => warn!("Could not seed post store: {}", e),
        }
        seed
    }

    async fn replace(&self, posts: &[Post]) -> Result<(), RepoError> {
        let json = serde_json::to_vec_pretty(posts)?;
        let path = self.path.clone();

        // The blocking task finishes even if the calling future is dropped.
        tokio::task::spawn_blocking(move || replace_file(&path, &json))
            .await
            .map_err(io::Error::other)
            .and_then(|r| r)
            .map_err(|e| self.write_error(e))
    }
}

/// Writes `contents` to a fresh temp file beside `path`, then renames it over
/// `path`. The temp file is removed if any step fails.
fn replace_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[async_trait]
impl PostRepository for JsonFilePostRepository {
    /// A missing file is seeded with the example posts. Unreadable or
    /// unparseable contents fall back to the same posts without touching the file.
    async fn read_all(&self) -> Vec<Post> {
        match self.load().await {
            Some(posts) => posts,
            None => self.seed().await,
        }
    }

    async fn write_all(&self, posts: &[Post]) -> Result<(), RepoError> {
        let _guard = self.file_lock.lock().await;
        self.replace(posts).await
    }
}
