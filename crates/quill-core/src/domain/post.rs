use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Message for a post submitted without a title.
pub const TITLE_REQUIRED: &str = "Title field is required";

/// Post entity - represents a blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
}

impl Post {
    /// Create a post with a freshly generated id.
    pub fn new(title: impl Into<String>, content: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content,
        }
    }

    /// Overwrite title and content from a draft, keeping the given id.
    pub fn apply(&mut self, id: Uuid, draft: PostDraft) {
        self.id = id;
        self.title = draft.title;
        self.content = draft.content;
    }
}

/// The client-editable part of a post. Ids are always assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: Option<String>,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, content: Option<String>) -> Self {
        Self {
            title: title.into(),
            content,
        }
    }

    /// Build the stored post for this draft under `id`.
    pub fn into_post(self, id: Uuid) -> Post {
        Post {
            id,
            title: self.title,
            content: self.content,
        }
    }
}
