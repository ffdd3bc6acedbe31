//! Book service: business rules over the book store, including the
//! cross-entity author existence check

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    dto::{PaginatedData, PaginationRequest},
    error::{AppError, AppResult},
    models::{
        author::Author,
        book::{Book, CreateBookRequest, UpdateBookRequest},
    },
    repository::{is_unique_violation, BookStore},
};

/// The slice of the author service the book service depends on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorLookup: Send + Sync {
    async fn author_by_id(&self, id: Uuid) -> AppResult<Option<Author>>;
}

#[derive(Clone)]
pub struct BookService {
    store: Arc<dyn BookStore>,
    authors: Arc<dyn AuthorLookup>,
}

impl BookService {
    pub fn new(store: Arc<dyn BookStore>, authors: Arc<dyn AuthorLookup>) -> Self {
        Self { store, authors }
    }

    /// Create a book. The referenced author must exist and the ISBN must be
    /// free among live books; a concurrent insert that slips past the
    /// pre-check loses against the unique index and is reported the same way.
    pub async fn create(&self, req: &CreateBookRequest) -> AppResult<Book> {
        let author = self.authors.author_by_id(req.author_id).await?;
        if author.is_none() {
            tracing::info!(author_id = %req.author_id, "author not found");
            return Err(AppError::AuthorNotFound);
        }

        if let Some(existing) = self.store.get_by_isbn(&req.isbn, None).await? {
            tracing::info!(book_id = %existing.id, isbn = %req.isbn, "book already exists");
            return Err(AppError::BookAlreadyExists);
        }

        match self.store.create(req, None).await {
            Ok(book) => {
                tracing::info!(book_id = %book.id, "book created");
                Ok(book)
            }
            Err(AppError::Database(err)) if is_unique_violation(&err) => {
                tracing::info!(isbn = %req.isbn, "book created concurrently");
                Err(AppError::BookAlreadyExists)
            }
            Err(err) => Err(err),
        }
    }

    /// Unlike authors, a missing book is a distinct not-found outcome.
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Book> {
        match self.store.get_by_id(id, None).await? {
            Some(book) => Ok(book),
            None => {
                tracing::info!(book_id = %id, "book not found");
                Err(AppError::BookNotFound)
            }
        }
    }

    pub async fn get_all(&self, pagination: &PaginationRequest) -> AppResult<PaginatedData<Book>> {
        let (books, total) = self.store.list(pagination, None).await?;
        Ok(PaginatedData::new(books, pagination, total))
    }

    pub async fn get_by_author_id(
        &self,
        author_id: Uuid,
        pagination: &PaginationRequest,
    ) -> AppResult<PaginatedData<Book>> {
        let (books, total) = self.store.list_by_author(author_id, pagination, None).await?;
        Ok(PaginatedData::new(books, pagination, total))
    }

    /// Full replacement of the book's fields. The new author must exist; the
    /// ISBN is not re-checked for uniqueness here.
    pub async fn update(&self, id: Uuid, req: &UpdateBookRequest) -> AppResult<()> {
        if self.store.get_by_id(id, None).await?.is_none() {
            tracing::info!(book_id = %id, "book not found");
            return Err(AppError::BookNotFound);
        }

        let author = self.authors.author_by_id(req.author_id).await?;
        if author.is_none() {
            tracing::info!(author_id = %req.author_id, "author not found");
            return Err(AppError::AuthorNotFound);
        }

        self.store.update(id, req, None).await?;
        tracing::info!(book_id = %id, "book updated");
        Ok(())
    }

    /// Idempotent: deleting an unknown id succeeds.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.store.delete(id, None).await?;
        tracing::info!(book_id = %id, "book deleted");
        Ok(())
    }
}
