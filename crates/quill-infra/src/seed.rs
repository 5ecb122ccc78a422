//! Startup seeding - loads an initial set of posts from a JSON file.

use std::path::{Path, PathBuf};

use thiserror::Error;

use quill_core::domain::Post;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Read a JSON array of posts from `path`.
pub async fn load_seed_posts(path: impl AsRef<Path>) -> Result<Vec<Post>, SeedError> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SeedError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let posts: Vec<Post> = serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(count = posts.len(), path = %path.display(), "Loaded seed posts");
    Ok(posts)
}
