//! Author service: business rules over the author store

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    dto::{PaginatedData, PaginationRequest},
    error::{AppError, AppResult},
    models::author::{Author, CreateAuthorRequest, UpdateAuthorRequest},
    repository::{is_unique_violation, AuthorStore},
    services::books::AuthorLookup,
};

#[derive(Clone)]
pub struct AuthorService {
    store: Arc<dyn AuthorStore>,
}

impl AuthorService {
    pub fn new(store: Arc<dyn AuthorStore>) -> Self {
        Self { store }
    }

    /// Create an author. The pen name must be free among live authors; a
    /// concurrent insert that slips past the pre-check loses against the
    /// unique index and is reported the same way.
    pub async fn create(&self, req: &CreateAuthorRequest) -> AppResult<Author> {
        if let Some(existing) = self.store.get_by_pen_name(&req.pen_name, None).await? {
            tracing::info!(author_id = %existing.id, "author already exists");
            return Err(AppError::AuthorAlreadyExists);
        }

        match self.store.create(req, None).await {
            Ok(author) => {
                tracing::info!(author_id = %author.id, "author created");
                Ok(author)
            }
            Err(AppError::Database(err)) if is_unique_violation(&err) => {
                tracing::info!(pen_name = %req.pen_name, "author created concurrently");
                Err(AppError::AuthorAlreadyExists)
            }
            Err(err) => Err(err),
        }
    }

    /// A missing author is not an error here: the result is simply `None`.
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Author>> {
        self.store.get_by_id(id, None).await
    }

    pub async fn get_all(&self, pagination: &PaginationRequest) -> AppResult<PaginatedData<Author>> {
        let (authors, total) = self.store.list(pagination, None).await?;
        Ok(PaginatedData::new(authors, pagination, total))
    }

    /// Full replacement of the author's fields. The pen name is not
    /// re-checked for uniqueness here.
    pub async fn update(&self, id: Uuid, req: &UpdateAuthorRequest) -> AppResult<()> {
        if self.store.get_by_id(id, None).await?.is_none() {
            tracing::info!(author_id = %id, "author not found");
            return Err(AppError::AuthorNotFound);
        }

        self.store.update(id, req, None).await?;
        tracing::info!(author_id = %id, "author updated");
        Ok(())
    }

    /// Idempotent: deleting an unknown id succeeds.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.store.delete(id, None).await?;
        tracing::info!(author_id = %id, "author deleted");
        Ok(())
    }
}

#[async_trait]
impl AuthorLookup for AuthorService {
    async fn author_by_id(&self, id: Uuid) -> AppResult<Option<Author>> {
        self.get_by_id(id).await
    }
}
