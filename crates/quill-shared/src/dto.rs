//! Data Transfer Objects - request types for the API.

use std::borrow::Cow;

use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

use quill_core::domain::TITLE_REQUIRED;

/// Body of create and update requests.
///
/// A client-supplied `id` is accepted and ignored; the store assigns ids.
#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct PostRequest {
    #[serde(default, skip_serializing)]
    pub id: Option<String>,

    #[validate(custom(function = "title_present"))]
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,

    #[serde(default)]
    pub content: Option<String>,
}

/// `"title": null` is treated like a missing title.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn title_present(title: &str) -> Result<(), ValidationError> {
    if title.is_empty() {
        let error = ValidationError::new("required").with_message(Cow::Borrowed(TITLE_REQUIRED));
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_title_fails_validation() {
        let req: PostRequest = serde_json::from_str(r#"{"content": "Learning is fun"}"#).unwrap();

        let errors = req.validate().unwrap_err();

        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn test_null_title_fails_validation() {
        let req: PostRequest = serde_json::from_str(r#"{"title": null}"#).unwrap();

        let errors = req.validate().unwrap_err();

        let title_errors = errors.field_errors()["title"];
        assert_eq!(title_errors[0].message.as_deref(), Some(TITLE_REQUIRED));
    }

    #[test]
    fn test_valid_request_ignores_id() {
        let req: PostRequest = serde_json::from_str(
            r#"{"id": "815accac-fd5b-478a-a9d6-f171a2f6ae7f", "title": "Learn TDD"}"#,
        )
        .unwrap();

        assert!(req.validate().is_ok());
        assert_eq!(req.content, None);
    }
}
