//! Domain entities - the core business objects.

mod post;

pub use post::{Post, PostDraft, TITLE_REQUIRED};
