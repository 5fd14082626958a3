use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of characters of `content` kept in a derived excerpt.
pub const EXCERPT_LENGTH: usize = 150;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// User ids that liked this post. Absent until the first like.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<Vec<String>>,
}

impl Post {
    /// Builds a fresh post. An empty or missing excerpt is derived from `content`.
    pub fn new(title: String, content: String, excerpt: Option<String>) -> Self {
        let now = Utc::now();
        let excerpt = excerpt
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| make_excerpt(&content));

        Self {
            id: new_post_id(),
            title,
            content,
            excerpt,
            created_at: now,
            updated_at: now,
            likes: None,
        }
    }

    pub fn has_like(&self, user_id: &str) -> bool {
        self.likes
            .as_ref()
            .is_some_and(|likes| likes.iter().any(|u| u == user_id))
    }

    /// Records a like. Returns false if `user_id` already liked the post.
    pub fn add_like(&mut self, user_id: &str) -> bool {
        if self.has_like(user_id) {
            return false;
        }
        self.likes
            .get_or_insert_with(Vec::new)
            .push(user_id.to_string());
        true
    }

    /// Drops a like. Returns false if `user_id` had not liked the post.
    pub fn remove_like(&mut self, user_id: &str) -> bool {
        match self.likes.as_mut() {
            Some(likes) if likes.iter().any(|u| u == user_id) => {
                likes.retain(|u| u != user_id);
                true
            }
            _ => false,
        }
    }

    pub fn like_list(&self) -> Vec<String> {
        self.likes.clone().unwrap_or_default()
    }
}

/// First 150 characters of `content` followed by `...`.
///
/// The ellipsis is appended even when nothing was cut off.
pub fn make_excerpt(content: &str) -> String {
    let mut excerpt: String = content.chars().take(EXCERPT_LENGTH).collect();
    excerpt.push_str("...");
    excerpt
}

/// Time-ordered id: UUID v7 carries the creation millisecond in its high bits.
pub fn new_post_id() -> String {
    Uuid::now_v7().to_string()
}

/// Example posts used to initialise an empty store, newest first.
pub fn seed_posts() -> Vec<Post> {
    let seed = [
        (
            "3",
            "Shipping a side project in a weekend",
            "Scope ruthlessly, pick boring tools and write the deploy script first. \
             Most weekend projects die in the last ten percent, so plan for it on Friday night \
             and leave Sunday afternoon for polish.",
            (2024, 3, 2),
        ),
        (
            "2",
            "What I learned building a photo sharing demo",
            "Image uploads look simple until you care about previews, sizes and storage. \
             Resizing on the client keeps the server dumb, but you still need to validate \
             what arrives.",
            (2024, 2, 10),
        ),
        (
            "1",
            "Hello, world",
            "Welcome to my blog. This is where I write about the projects in this portfolio, \
             the tools I use and the things that broke along the way.",
            (2024, 1, 15),
        ),
    ];

    seed.into_iter()
        .map(|(id, title, content, (y, m, d))| {
            let at = Utc
                .with_ymd_and_hms(y, m, d, 9, 0, 0)
                .single()
                .unwrap_or_default();
            Post {
                id: id.to_string(),
                title: title.to_string(),
                content: content.to_string(),
                excerpt: make_excerpt(content),
                created_at: at,
                updated_at: at,
                likes: None,
            }
        })
        .collect()
}
