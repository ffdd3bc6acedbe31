//! Author model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::validation::ValidateRequest;

/// Full author row from the database. Deletion is logical: a non-null
/// `deleted_at` excludes the row from every read.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Author {
    pub id: Uuid,
    pub pen_name: String,
    pub birth_year: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Create author request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuthorRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Pen name must be between 1 and 255 characters"
    ))]
    pub pen_name: String,
    #[validate(range(
        min = 1800,
        max = 2600,
        message = "Birth year must be between 1800 and 2600"
    ))]
    pub birth_year: i32,
}

impl ValidateRequest for CreateAuthorRequest {
    fn field_order() -> &'static [&'static str] {
        &["pen_name", "birth_year"]
    }
}

/// Update author request. Updates are full replacement: the request carries
/// the complete new field set.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAuthorRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Pen name must be between 1 and 255 characters"
    ))]
    pub pen_name: String,
    #[validate(range(
        min = 1800,
        max = 2600,
        message = "Birth year must be between 1800 and 2600"
    ))]
    pub birth_year: i32,
}

impl ValidateRequest for UpdateAuthorRequest {
    fn field_order() -> &'static [&'static str] {
        &["pen_name", "birth_year"]
    }
}

/// Author representation on the wire
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResponse {
    pub id: Uuid,
    pub pen_name: String,
    pub birth_year: i32,
}

impl From<Author> for AuthorResponse {
    fn from(author: Author) -> Self {
        Self {
            id: author.id,
            pen_name: author.pen_name,
            birth_year: author.birth_year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_messages_follow_field_order() {
        let req = CreateAuthorRequest {
            pen_name: String::new(),
            birth_year: 1500,
        };
        let messages = req.validation_messages();
        assert_eq!(
            messages,
            vec![
                "Pen name must be between 1 and 255 characters".to_string(),
                "Birth year must be between 1800 and 2600".to_string(),
            ]
        );
    }

    #[test]
    fn create_request_accepts_boundary_years() {
        for birth_year in [1800, 2600] {
            let req = CreateAuthorRequest {
                pen_name: "George Orwell".to_string(),
                birth_year,
            };
            assert!(req.validation_messages().is_empty());
        }
    }

    #[test]
    fn create_request_rejects_long_pen_name() {
        let req = CreateAuthorRequest {
            pen_name: "x".repeat(256),
            birth_year: 1903,
        };
        assert_eq!(
            req.validation_messages(),
            vec!["Pen name must be between 1 and 255 characters".to_string()]
        );
    }

    #[test]
    fn response_hides_storage_fields() {
        let author = Author {
            id: Uuid::new_v4(),
            pen_name: "Mark Twain".to_string(),
            birth_year: 1835,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        };
        let body = serde_json::to_value(AuthorResponse::from(author.clone())).unwrap();
        assert_eq!(body["penName"], "Mark Twain");
        assert_eq!(body["birthYear"], 1835);
        assert!(body.get("createdAt").is_none());
        assert!(body.get("deletedAt").is_none());
    }
}
