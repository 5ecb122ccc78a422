//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// JSON file with posts to load at startup.
    pub seed_posts: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT").and_then(|p| p.parse().ok()).unwrap_or(8080),
            seed_posts: lookup("SEED_POSTS")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
        }
    }
}
