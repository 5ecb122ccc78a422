//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//! Posts live in process memory only and are lost on restart.

pub mod seed;
pub mod store;

pub use seed::{SeedError, load_seed_posts};
pub use store::InMemoryPostStore;
