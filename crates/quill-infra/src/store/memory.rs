//! In-memory post store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::DomainError;
use quill_core::domain::{Post, PostDraft, TITLE_REQUIRED};
use quill_core::ports::PostStore;

struct Entry {
    seq: u64,
    post: Post,
}

#[derive(Default)]
struct Posts {
    by_id: HashMap<Uuid, Entry>,
    next_seq: u64,
}

impl Posts {
    /// Insert at the end of the order. Returns false if the id is already taken.
    fn push(&mut self, post: Post) -> bool {
        if self.by_id.contains_key(&post.id) {
            return false;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.by_id.insert(post.id, Entry { seq, post });
        true
    }

    fn fresh_id(&self) -> Uuid {
        loop {
            let id = Uuid::new_v4();
            if !self.by_id.contains_key(&id) {
                return id;
            }
        }
    }
}

/// Post store backed by a HashMap keyed by id, guarded by an async RwLock.
///
/// Every operation holds the lock for its whole check-and-mutate step, so
/// concurrent requests never observe a half-applied change.
/// Note: Data is lost on process restart.
pub struct InMemoryPostStore {
    posts: RwLock<Posts>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Posts::default()),
        }
    }

    /// Build a store holding `posts` in the given order, keeping their ids.
    /// Later posts reusing an earlier id are skipped.
    pub fn with_posts(posts: impl IntoIterator<Item = Post>) -> Self {
        let mut inner = Posts::default();
        for post in posts {
            let id = post.id;
            if !inner.push(post) {
                tracing::warn!(post_id = %id, "Skipping post with duplicate id");
            }
        }
        Self {
            posts: RwLock::new(inner),
        }
    }

    fn check_title(draft: &PostDraft) -> Result<(), DomainError> {
        if draft.title.is_empty() {
            return Err(DomainError::Validation(TITLE_REQUIRED.to_string()));
        }
        Ok(())
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn list(&self) -> Vec<Post> {
        let posts = self.posts.read().await;
        let mut entries: Vec<&Entry> = posts.by_id.values().collect();
        entries.sort_by_key(|e| e.seq);
        entries.into_iter().map(|e| e.post.clone()).collect()
    }

    async fn get(&self, id: Option<Uuid>) -> Result<Post, DomainError> {
        let id = id.ok_or(DomainError::IdNotProvided)?;
        let posts = self.posts.read().await;

        posts
            .by_id
            .get(&id)
            .map(|e| e.post.clone())
            .ok_or(DomainError::PostNotFound)
    }

    async fn add(&self, draft: PostDraft) -> Result<Post, DomainError> {
        Self::check_title(&draft)?;

        let mut posts = self.posts.write().await;
        let post = draft.into_post(posts.fresh_id());
        posts.push(post.clone());

        tracing::debug!(post_id = %post.id, "Post created");
        Ok(post)
    }

    async fn remove(&self, id: Uuid) -> Result<String, DomainError> {
        let mut posts = self.posts.write().await;
        let entry = posts
            .by_id
            .remove(&id)
            .ok_or(DomainError::NothingToRemove(id))?;

        tracing::debug!(post_id = %id, "Post deleted");
        Ok(format!("{} deleted", entry.post.title))
    }

    async fn update(
        &self,
        id: Option<Uuid>,
        draft: Option<PostDraft>,
    ) -> Result<Post, DomainError> {
        let (Some(id), Some(draft)) = (id, draft) else {
            return Err(DomainError::UpdateIncomplete);
        };
        Self::check_title(&draft)?;

        let mut posts = self.posts.write().await;
        // Checked before removal so a miss leaves the collection untouched.
        let mut entry = posts
            .by_id
            .remove(&id)
            .ok_or(DomainError::UpdateTargetMissing)?;

        entry.post.apply(id, draft);
        let post = entry.post;
        posts.push(post.clone());

        tracing::debug!(post_id = %id, "Post updated");
        Ok(post)
    }

    async fn len(&self) -> usize {
        self.posts.read().await.by_id.len()
    }
}
