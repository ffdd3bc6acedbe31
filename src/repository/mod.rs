//! Repository layer for database operations

pub mod authors;
pub mod books;

use async_trait::async_trait;
use sqlx::{PgConnection, Pool, Postgres};
use uuid::Uuid;

use crate::{
    dto::PaginationRequest,
    error::AppResult,
    models::{
        author::{Author, CreateAuthorRequest, UpdateAuthorRequest},
        book::{Book, CreateBookRequest, UpdateBookRequest},
    },
};

pub use authors::AuthorsRepository;
pub use books::BooksRepository;

/// Main repository struct holding the database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub authors: AuthorsRepository,
    pub books: BooksRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            authors: AuthorsRepository::new(pool.clone()),
            books: BooksRepository::new(pool.clone()),
            pool,
        }
    }
}

/// Storage operations for authors. Every method takes an optional
/// transaction connection; `None` runs the statement on the ambient pool.
/// Reads exclude logically deleted rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorStore: Send + Sync {
    async fn create<'a>(
        &self,
        data: &CreateAuthorRequest,
        tx: Option<&'a mut PgConnection>,
    ) -> AppResult<Author>;

    async fn get_by_id<'a>(&self, id: Uuid, tx: Option<&'a mut PgConnection>)
        -> AppResult<Option<Author>>;

    async fn get_by_pen_name<'a>(
        &self,
        pen_name: &str,
        tx: Option<&'a mut PgConnection>,
    ) -> AppResult<Option<Author>>;

    /// One page of authors plus the total live-row count.
    async fn list<'a>(
        &self,
        pagination: &PaginationRequest,
        tx: Option<&'a mut PgConnection>,
    ) -> AppResult<(Vec<Author>, i64)>;

    async fn update<'a>(
        &self,
        id: Uuid,
        data: &UpdateAuthorRequest,
        tx: Option<&'a mut PgConnection>,
    ) -> AppResult<()>;

    /// Soft delete. Deleting an id that does not exist is not an error.
    async fn delete<'a>(&self, id: Uuid, tx: Option<&'a mut PgConnection>) -> AppResult<()>;
}

/// Storage operations for books, same transaction convention as
/// [`AuthorStore`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    async fn create<'a>(
        &self,
        data: &CreateBookRequest,
        tx: Option<&'a mut PgConnection>,
    ) -> AppResult<Book>;

    /// The book's author is attached when it resolves to a live row.
    async fn get_by_id<'a>(&self, id: Uuid, tx: Option<&'a mut PgConnection>) -> AppResult<Option<Book>>;

    async fn get_by_isbn<'a>(
        &self,
        isbn: &str,
        tx: Option<&'a mut PgConnection>,
    ) -> AppResult<Option<Book>>;

    /// One page of books, authors attached where resolvable, plus the total
    /// live-row count.
    async fn list<'a>(
        &self,
        pagination: &PaginationRequest,
        tx: Option<&'a mut PgConnection>,
    ) -> AppResult<(Vec<Book>, i64)>;

    /// One page of a single author's books. Authors are not attached here.
    async fn list_by_author<'a>(
        &self,
        author_id: Uuid,
        pagination: &PaginationRequest,
        tx: Option<&'a mut PgConnection>,
    ) -> AppResult<(Vec<Book>, i64)>;

    async fn update<'a>(
        &self,
        id: Uuid,
        data: &UpdateBookRequest,
        tx: Option<&'a mut PgConnection>,
    ) -> AppResult<()>;

    async fn delete<'a>(&self, id: Uuid, tx: Option<&'a mut PgConnection>) -> AppResult<()>;
}

const PG_UNIQUE_VIOLATION: &str = "23505";

/// Whether a storage error is a Postgres unique-constraint violation.
/// Create paths use this to report the losing side of a concurrent insert as
/// "already exists" instead of an internal error.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some(PG_UNIQUE_VIOLATION))
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::borrow::Cow;
    use std::error::Error as StdError;

    #[derive(Debug)]
    pub struct FakeDbError {
        pub code: &'static str,
    }

    impl std::fmt::Display for FakeDbError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "fake database error (sqlstate {})", self.code)
        }
    }

    impl StdError for FakeDbError {}

    impl sqlx::error::DatabaseError for FakeDbError {
        fn message(&self) -> &str {
            "duplicate key value violates unique constraint"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.code))
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> sqlx::error::ErrorKind {
            match self.code {
                super::PG_UNIQUE_VIOLATION => sqlx::error::ErrorKind::UniqueViolation,
                _ => sqlx::error::ErrorKind::Other,
            }
        }
    }

    pub fn unique_violation() -> sqlx::Error {
        sqlx::Error::Database(Box::new(FakeDbError {
            code: super::PG_UNIQUE_VIOLATION,
        }))
    }

    pub fn other_db_error() -> sqlx::Error {
        sqlx::Error::Database(Box::new(FakeDbError { code: "57014" }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_violation_is_detected_by_sqlstate() {
        assert!(is_unique_violation(&test_support::unique_violation()));
        assert!(!is_unique_violation(&test_support::other_db_error()));
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
    }
}
