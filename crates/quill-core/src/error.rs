//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Domain errors - failures of the post store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("id not provided")]
    IdNotProvided,

    #[error("Post Not found")]
    PostNotFound,

    #[error("No post with id {0} to delete")]
    NothingToRemove(Uuid),

    #[error("One of Id or Post is missing")]
    UpdateIncomplete,

    #[error("The Post with the id is missing")]
    UpdateTargetMissing,

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    /// Whether this error means the referenced post (or its reference) is absent.
    pub fn is_not_found(&self) -> bool {
        !matches!(self, DomainError::Validation(_))
    }
}
