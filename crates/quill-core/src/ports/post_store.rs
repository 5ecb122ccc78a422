use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, PostDraft};
use crate::error::DomainError;

/// Storage for blog posts.
///
/// Implementations own every post they hold; callers only ever see clones.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// All posts, in insertion order.
    async fn list(&self) -> Vec<Post>;

    /// Find a post by id. `None` means the caller could not supply one.
    async fn get(&self, id: Option<Uuid>) -> Result<Post, DomainError>;

    /// Store a draft under a newly generated id and return the stored post.
    async fn add(&self, draft: PostDraft) -> Result<Post, DomainError>;

    /// Delete a post, returning a confirmation message naming its title.
    async fn remove(&self, id: Uuid) -> Result<String, DomainError>;

    /// Replace title and content of an existing post.
    async fn update(&self, id: Option<Uuid>, draft: Option<PostDraft>)
    -> Result<Post, DomainError>;

    /// Number of stored posts.
    async fn len(&self) -> usize;
}
