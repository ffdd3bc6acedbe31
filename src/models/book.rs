//! Book model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::models::author::{Author, AuthorResponse};
use crate::validation::ValidateRequest;

/// Full book row from the database. The author is not part of the row; reads
/// that resolve it attach it after the fact.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: Uuid,
    pub author_id: Uuid,
    pub name: String,
    pub isbn: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    #[sqlx(skip)]
    pub author: Option<Author>,
}

/// Create book request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookRequest {
    pub author_id: Uuid,
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,
    #[validate(custom(
        function = "crate::validation::validate_isbn",
        message = "ISBN must be a valid ISBN-10 or ISBN-13"
    ))]
    pub isbn: String,
}

impl ValidateRequest for CreateBookRequest {
    fn field_order() -> &'static [&'static str] {
        &["author_id", "name", "isbn"]
    }
}

/// Update book request, full replacement like the author variant.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookRequest {
    pub author_id: Uuid,
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,
    #[validate(custom(
        function = "crate::validation::validate_isbn",
        message = "ISBN must be a valid ISBN-10 or ISBN-13"
    ))]
    pub isbn: String,
}

impl ValidateRequest for UpdateBookRequest {
    fn field_order() -> &'static [&'static str] {
        &["author_id", "name", "isbn"]
    }
}

/// Book representation on the wire; `author` appears only when it was
/// resolved for the read.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    pub id: Uuid,
    pub author_id: Uuid,
    pub name: String,
    pub isbn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorResponse>,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            author_id: book.author_id,
            name: book.name,
            isbn: book.isbn,
            author: book.author.map(AuthorResponse::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(isbn: &str) -> CreateBookRequest {
        CreateBookRequest {
            author_id: Uuid::new_v4(),
            name: "The War of the Worlds".to_string(),
            isbn: isbn.to_string(),
        }
    }

    #[test]
    fn create_request_accepts_valid_isbns() {
        assert!(request("9780306406157").validation_messages().is_empty());
        assert!(request("0-306-40615-2").validation_messages().is_empty());
    }

    #[test]
    fn create_request_rejects_bad_isbn() {
        assert_eq!(
            request("1234567890").validation_messages(),
            vec!["ISBN must be a valid ISBN-10 or ISBN-13".to_string()]
        );
    }

    #[test]
    fn create_request_messages_follow_field_order() {
        let req = CreateBookRequest {
            author_id: Uuid::new_v4(),
            name: String::new(),
            isbn: "garbage".to_string(),
        };
        assert_eq!(
            req.validation_messages(),
            vec![
                "Name must be between 1 and 255 characters".to_string(),
                "ISBN must be a valid ISBN-10 or ISBN-13".to_string(),
            ]
        );
    }

    #[test]
    fn response_omits_unresolved_author() {
        let book = Book {
            id: Uuid::new_v4(),
            author_id: Uuid::new_v4(),
            name: "Dracula".to_string(),
            isbn: "9780306406157".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
            author: None,
        };
        let body = serde_json::to_value(BookResponse::from(book)).unwrap();
        assert!(body.get("author").is_none());
        assert!(body.get("authorId").is_some());
    }

    #[test]
    fn response_includes_resolved_author() {
        let author = Author {
            id: Uuid::new_v4(),
            pen_name: "Bram Stoker".to_string(),
            birth_year: 1847,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        };
        let book = Book {
            id: Uuid::new_v4(),
            author_id: author.id,
            name: "Dracula".to_string(),
            isbn: "9780306406157".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
            author: Some(author),
        };
        let body = serde_json::to_value(BookResponse::from(book)).unwrap();
        assert_eq!(body["author"]["penName"], "Bram Stoker");
    }
}
