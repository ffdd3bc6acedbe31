//! Error types for the Inkwell server

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::dto::{BaseResponse, ResponseCode};

/// Main application error type. Every variant maps to exactly one result
/// code; the HTTP status is derived from the code.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("JSON parse error: {0}")]
    Binding(String),

    #[error("invalid identifier format")]
    InvalidId,

    #[error("validation failed")]
    Validation(Vec<String>),

    #[error("author not found")]
    AuthorNotFound,

    #[error("book not found")]
    BookNotFound,

    #[error("author already exists")]
    AuthorAlreadyExists,

    #[error("book already exists")]
    BookAlreadyExists,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn code(&self) -> ResponseCode {
        match self {
            AppError::Binding(_) => ResponseCode::BindingError,
            AppError::InvalidId => ResponseCode::UuidFormatInvalid,
            AppError::Validation(_) => ResponseCode::ValidationError,
            AppError::AuthorNotFound => ResponseCode::AuthorNotFound,
            AppError::BookNotFound => ResponseCode::BookNotFound,
            AppError::AuthorAlreadyExists => ResponseCode::AuthorAlreadyExists,
            AppError::BookAlreadyExists => ResponseCode::BookAlreadyExists,
            AppError::Database(_) | AppError::Internal(_) => ResponseCode::InternalError,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();
        let data = match &self {
            AppError::Validation(messages) => Some(json!(messages)),
            AppError::Binding(message) => Some(json!(message)),
            AppError::Database(err) => {
                tracing::error!("Database error: {:?}", err);
                None
            }
            AppError::Internal(message) => {
                tracing::error!("Internal error: {}", message);
                None
            }
            _ => None,
        };

        (code.http_status(), Json(BaseResponse::new(code, data))).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn codes_match_variants() {
        assert_eq!(AppError::AuthorNotFound.code(), ResponseCode::AuthorNotFound);
        assert_eq!(AppError::BookNotFound.code(), ResponseCode::BookNotFound);
        assert_eq!(
            AppError::BookAlreadyExists.code(),
            ResponseCode::BookAlreadyExists
        );
        assert_eq!(AppError::InvalidId.code(), ResponseCode::UuidFormatInvalid);
        assert_eq!(
            AppError::Internal("boom".into()).code(),
            ResponseCode::InternalError
        );
    }

    #[test]
    fn distinct_bad_request_codes_share_the_status() {
        for err in [
            AppError::Binding("unexpected end of input".into()),
            AppError::InvalidId,
            AppError::Validation(vec!["Pen name must be between 1 and 255 characters".into()]),
        ] {
            assert_eq!(err.code().http_status(), StatusCode::BAD_REQUEST);
        }
    }
}
