//! Result code taxonomy shared by every service operation

use axum::http::StatusCode;
use serde::{Serialize, Serializer};

/// Closed set of result codes returned by the API. The wire format is the
/// five-digit string; the leading three digits carry the HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    // Standard codes
    Success,
    Updated,
    Deleted,
    Created,
    BadRequest,
    NotFound,
    Conflict,
    UnprocessableEntity,
    InternalError,

    // Custom codes
    BindingError,
    UuidFormatInvalid,
    ValidationError,
    BookNotFound,
    AuthorNotFound,
    BookAlreadyExists,
    AuthorAlreadyExists,
}

impl ResponseCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::Success => "20000",
            ResponseCode::Updated => "20010",
            ResponseCode::Deleted => "20020",
            ResponseCode::Created => "20100",
            ResponseCode::BadRequest => "40000",
            ResponseCode::NotFound => "40400",
            ResponseCode::Conflict => "40900",
            ResponseCode::UnprocessableEntity => "42200",
            ResponseCode::InternalError => "50000",
            ResponseCode::BindingError => "40010",
            ResponseCode::UuidFormatInvalid => "40011",
            ResponseCode::ValidationError => "40020",
            ResponseCode::BookNotFound => "40401",
            ResponseCode::AuthorNotFound => "40402",
            ResponseCode::BookAlreadyExists => "40901",
            ResponseCode::AuthorAlreadyExists => "40902",
        }
    }

    pub const fn message(&self) -> &'static str {
        match self {
            ResponseCode::Success => "Success",
            ResponseCode::Updated => "Updated successfully",
            ResponseCode::Deleted => "Deleted successfully",
            ResponseCode::Created => "Created successfully",
            ResponseCode::BadRequest => "Bad Request",
            ResponseCode::NotFound => "Not Found",
            ResponseCode::Conflict => "Conflict",
            ResponseCode::UnprocessableEntity => "Unprocessable Entity",
            ResponseCode::InternalError => "Internal Server Error",
            ResponseCode::BindingError => "JSON parse error",
            ResponseCode::UuidFormatInvalid => "Invalid UUID format",
            ResponseCode::ValidationError => "Validation error",
            ResponseCode::BookNotFound => "Book not found",
            ResponseCode::AuthorNotFound => "Author not found",
            ResponseCode::BookAlreadyExists => "Book already exists",
            ResponseCode::AuthorAlreadyExists => "Author already exists",
        }
    }

    pub fn http_status(&self) -> StatusCode {
        status_from_code(self.as_str())
    }
}

impl Serialize for ResponseCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Derive the HTTP status from a code string's three-character prefix.
/// Fails closed to 500 when the prefix is missing, non-numeric, or not a
/// valid status number.
pub fn status_from_code(code: &str) -> StatusCode {
    code.get(..3)
        .and_then(|prefix| prefix.parse::<u16>().ok())
        .and_then(|status| StatusCode::from_u16(status).ok())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_derivation() {
        assert_eq!(ResponseCode::Success.http_status(), StatusCode::OK);
        assert_eq!(ResponseCode::Created.http_status(), StatusCode::CREATED);
        assert_eq!(ResponseCode::BookNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ResponseCode::AuthorAlreadyExists.http_status(), StatusCode::CONFLICT);
        assert_eq!(
            ResponseCode::InternalError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn status_from_code_parses_prefix() {
        assert_eq!(status_from_code("20000"), StatusCode::OK);
        assert_eq!(status_from_code("40401"), StatusCode::NOT_FOUND);
        assert_eq!(status_from_code("50000"), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(status_from_code("42200"), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn status_from_code_fails_closed() {
        assert_eq!(status_from_code(""), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(status_from_code("20"), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(status_from_code("abc00"), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(status_from_code("00000"), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn every_code_has_a_valid_status() {
        let codes = [
            ResponseCode::Success,
            ResponseCode::Updated,
            ResponseCode::Deleted,
            ResponseCode::Created,
            ResponseCode::BadRequest,
            ResponseCode::NotFound,
            ResponseCode::Conflict,
            ResponseCode::UnprocessableEntity,
            ResponseCode::InternalError,
            ResponseCode::BindingError,
            ResponseCode::UuidFormatInvalid,
            ResponseCode::ValidationError,
            ResponseCode::BookNotFound,
            ResponseCode::AuthorNotFound,
            ResponseCode::BookAlreadyExists,
            ResponseCode::AuthorAlreadyExists,
        ];
        for code in codes {
            let prefix: u16 = code.as_str()[..3].parse().unwrap();
            assert_eq!(code.http_status().as_u16(), prefix, "{:?}", code);
        }
    }
}
