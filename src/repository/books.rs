//! Books repository for database operations

use async_trait::async_trait;
use sqlx::{PgConnection, Pool, Postgres};
use std::collections::HashMap;
use uuid::Uuid;

use super::BookStore;
use crate::{
    dto::PaginationRequest,
    error::AppResult,
    models::{
        author::Author,
        book::{Book, CreateBookRequest, UpdateBookRequest},
    },
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Resolve the authors for a set of books and attach them in place.
    /// Done as a second query due to sqlx limitations around nested rows;
    /// books whose author is deleted stay unattached.
    async fn attach_authors<'a>(
        &self,
        books: &mut [Book],
        tx: Option<&'a mut PgConnection>,
    ) -> AppResult<()> {
        let mut author_ids: Vec<Uuid> = books.iter().map(|book| book.author_id).collect();
        author_ids.sort_unstable();
        author_ids.dedup();
        if author_ids.is_empty() {
            return Ok(());
        }

        let query = sqlx::query_as::<_, Author>(
            "SELECT * FROM authors WHERE id = ANY($1) AND deleted_at IS NULL",
        )
        .bind(&author_ids);

        let authors = match tx {
            Some(conn) => query.fetch_all(&mut *conn).await?,
            None => query.fetch_all(&self.pool).await?,
        };

        let by_id: HashMap<Uuid, Author> =
            authors.into_iter().map(|author| (author.id, author)).collect();
        for book in books.iter_mut() {
            book.author = by_id.get(&book.author_id).cloned();
        }
        Ok(())
    }
}

#[async_trait]
impl BookStore for BooksRepository {
    async fn create<'a>(
        &self,
        data: &CreateBookRequest,
        tx: Option<&'a mut PgConnection>,
    ) -> AppResult<Book> {
        let query = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (id, author_id, name, isbn)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(data.author_id)
        .bind(&data.name)
        .bind(&data.isbn);

        let book = match tx {
            Some(conn) => query.fetch_one(&mut *conn).await?,
            None => query.fetch_one(&self.pool).await?,
        };
        Ok(book)
    }

    async fn get_by_id<'a>(&self, id: Uuid, mut tx: Option<&'a mut PgConnection>) -> AppResult<Option<Book>> {
        let query = sqlx::query_as::<_, Book>(
            "SELECT * FROM books WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id);

        let book = match tx.as_deref_mut() {
            Some(conn) => query.fetch_optional(&mut *conn).await?,
            None => query.fetch_optional(&self.pool).await?,
        };

        match book {
            Some(mut book) => {
                self.attach_authors(std::slice::from_mut(&mut book), tx).await?;
                Ok(Some(book))
            }
            None => Ok(None),
        }
    }

    async fn get_by_isbn<'a>(
        &self,
        isbn: &str,
        mut tx: Option<&'a mut PgConnection>,
    ) -> AppResult<Option<Book>> {
        let query = sqlx::query_as::<_, Book>(
            "SELECT * FROM books WHERE isbn = $1 AND deleted_at IS NULL",
        )
        .bind(isbn);

        let book = match tx.as_deref_mut() {
            Some(conn) => query.fetch_optional(&mut *conn).await?,
            None => query.fetch_optional(&self.pool).await?,
        };

        match book {
            Some(mut book) => {
                self.attach_authors(std::slice::from_mut(&mut book), tx).await?;
                Ok(Some(book))
            }
            None => Ok(None),
        }
    }

    async fn list<'a>(
        &self,
        pagination: &PaginationRequest,
        mut tx: Option<&'a mut PgConnection>,
    ) -> AppResult<(Vec<Book>, i64)> {
        let count_query =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM books WHERE deleted_at IS NULL");
        let page_query = sqlx::query_as::<_, Book>(
            r#"
            SELECT * FROM books
            WHERE deleted_at IS NULL
            ORDER BY created_at
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(pagination.limit())
        .bind(pagination.offset());

        let (mut books, total) = match tx.as_deref_mut() {
            Some(conn) => {
                let total = count_query.fetch_one(&mut *conn).await?;
                let books = page_query.fetch_all(&mut *conn).await?;
                (books, total)
            }
            None => {
                let total = count_query.fetch_one(&self.pool).await?;
                let books = page_query.fetch_all(&self.pool).await?;
                (books, total)
            }
        };

        self.attach_authors(&mut books, tx).await?;
        Ok((books, total))
    }

    async fn list_by_author<'a>(
        &self,
        author_id: Uuid,
        pagination: &PaginationRequest,
        tx: Option<&'a mut PgConnection>,
    ) -> AppResult<(Vec<Book>, i64)> {
        let count_query = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM books WHERE author_id = $1 AND deleted_at IS NULL",
        )
        .bind(author_id);
        let page_query = sqlx::query_as::<_, Book>(
            r#"
            SELECT * FROM books
            WHERE author_id = $1 AND deleted_at IS NULL
            ORDER BY created_at
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(author_id)
        .bind(pagination.limit())
        .bind(pagination.offset());

        let (books, total) = match tx {
            Some(conn) => {
                let total = count_query.fetch_one(&mut *conn).await?;
                let books = page_query.fetch_all(&mut *conn).await?;
                (books, total)
            }
            None => {
                let total = count_query.fetch_one(&self.pool).await?;
                let books = page_query.fetch_all(&self.pool).await?;
                (books, total)
            }
        };
        Ok((books, total))
    }

    async fn update<'a>(
        &self,
        id: Uuid,
        data: &UpdateBookRequest,
        tx: Option<&'a mut PgConnection>,
    ) -> AppResult<()> {
        let query = sqlx::query(
            r#"
            UPDATE books
            SET author_id = $1, name = $2, isbn = $3, updated_at = NOW()
            WHERE id = $4 AND deleted_at IS NULL
            "#,
        )
        .bind(data.author_id)
        .bind(&data.name)
        .bind(&data.isbn)
        .bind(id);

        match tx {
            Some(conn) => query.execute(&mut *conn).await?,
            None => query.execute(&self.pool).await?,
        };
        Ok(())
    }

    async fn delete<'a>(&self, id: Uuid, tx: Option<&'a mut PgConnection>) -> AppResult<()> {
        let query = sqlx::query(
            "UPDATE books SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id);

        match tx {
            Some(conn) => query.execute(&mut *conn).await?,
            None => query.execute(&self.pool).await?,
        };
        Ok(())
    }
}
