//! Error handling - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use quill_core::DomainError;
use quill_shared::ErrorResponse;
use std::fmt;
use validator::ValidationErrors;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    /// Missing reference or missing post. A delete miss carries no detail.
    NotFound(Option<String>),
    /// Request body rejected before reaching the store.
    Validation(Vec<String>),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(Some(msg)) => write!(f, "Not found: {}", msg),
            AppError::NotFound(None) => write!(f, "Not found"),
            AppError::Validation(errors) => write!(f, "Validation errors: {:?}", errors),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail.clone()),
            AppError::Validation(errors) => ErrorResponse::bad_request(errors.join(", ")),
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(vec![msg]),
            DomainError::NothingToRemove(id) => {
                tracing::debug!(post_id = %id, "Delete target not found");
                AppError::NotFound(None)
            }
            other => AppError::NotFound(Some(other.to_string())),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter()
                    .map(|e| match &e.message {
                        Some(message) => format!("{}: {}", field, message),
                        None => format!("{}: {}", field, e.code),
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
        messages.sort();
        AppError::Validation(messages)
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
