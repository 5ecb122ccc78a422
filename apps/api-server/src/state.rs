//! Application state - shared across all handlers.

use std::path::Path;
use std::sync::Arc;

use quill_core::ports::PostStore;
use quill_infra::{InMemoryPostStore, load_seed_posts};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
}

impl AppState {
    /// Build the application state, optionally seeding the store from a file.
    pub async fn new(seed_path: Option<&Path>) -> Self {
        let store = match seed_path {
            Some(path) => match load_seed_posts(path).await {
                Ok(posts) => InMemoryPostStore::with_posts(posts),
                Err(e) => {
                    tracing::error!("Failed to load seed posts: {}. Starting empty.", e);
                    InMemoryPostStore::new()
                }
            },
            None => InMemoryPostStore::new(),
        };

        tracing::info!("Application state initialized");

        Self::with_store(Arc::new(store))
    }

    pub fn with_store(posts: Arc<dyn PostStore>) -> Self {
        Self { posts }
    }
}
