//! Authors repository for database operations

use async_trait::async_trait;
use sqlx::{PgConnection, Pool, Postgres};
use uuid::Uuid;

use super::AuthorStore;
use crate::{
    dto::PaginationRequest,
    error::AppResult,
    models::author::{Author, CreateAuthorRequest, UpdateAuthorRequest},
};

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: Pool<Postgres>,
}

impl AuthorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorStore for AuthorsRepository {
    async fn create<'a>(
        &self,
        data: &CreateAuthorRequest,
        tx: Option<&'a mut PgConnection>,
    ) -> AppResult<Author> {
        let query = sqlx::query_as::<_, Author>(
            r#"
            INSERT INTO authors (id, pen_name, birth_year)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&data.pen_name)
        .bind(data.birth_year);

        let author = match tx {
            Some(conn) => query.fetch_one(&mut *conn).await?,
            None => query.fetch_one(&self.pool).await?,
        };
        Ok(author)
    }

    async fn get_by_id<'a>(
        &self,
        id: Uuid,
        tx: Option<&'a mut PgConnection>,
    ) -> AppResult<Option<Author>> {
        let query = sqlx::query_as::<_, Author>(
            "SELECT * FROM authors WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id);

        let author = match tx {
            Some(conn) => query.fetch_optional(&mut *conn).await?,
            None => query.fetch_optional(&self.pool).await?,
        };
        Ok(author)
    }

    async fn get_by_pen_name<'a>(
        &self,
        pen_name: &str,
        tx: Option<&'a mut PgConnection>,
    ) -> AppResult<Option<Author>> {
        let query = sqlx::query_as::<_, Author>(
            "SELECT * FROM authors WHERE pen_name = $1 AND deleted_at IS NULL",
        )
        .bind(pen_name);

        let author = match tx {
            Some(conn) => query.fetch_optional(&mut *conn).await?,
            None => query.fetch_optional(&self.pool).await?,
        };
        Ok(author)
    }

    async fn list<'a>(
        &self,
        pagination: &PaginationRequest,
        tx: Option<&'a mut PgConnection>,
    ) -> AppResult<(Vec<Author>, i64)> {
        let count_query =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM authors WHERE deleted_at IS NULL");
        let page_query = sqlx::query_as::<_, Author>(
            r#"
            SELECT * FROM authors
            WHERE deleted_at IS NULL
            ORDER BY created_at
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(pagination.limit())
        .bind(pagination.offset());

        let (authors, total) = match tx {
            Some(conn) => {
                let total = count_query.fetch_one(&mut *conn).await?;
                let authors = page_query.fetch_all(&mut *conn).await?;
                (authors, total)
            }
            None => {
                let total = count_query.fetch_one(&self.pool).await?;
                let authors = page_query.fetch_all(&self.pool).await?;
                (authors, total)
            }
        };
        Ok((authors, total))
    }

    async fn update<'a>(
        &self,
        id: Uuid,
        data: &UpdateAuthorRequest,
        tx: Option<&'a mut PgConnection>,
    ) -> AppResult<()> {
        let query = sqlx::query(
            r#"
            UPDATE authors
            SET pen_name = $1, birth_year = $2, updated_at = NOW()
            WHERE id = $3 AND deleted_at IS NULL
            "#,
        )
        .bind(&data.pen_name)
        .bind(data.birth_year)
        .bind(id);

        match tx {
            Some(conn) => query.execute(&mut *conn).await?,
            None => query.execute(&self.pool).await?,
        };
        Ok(())
    }

    async fn delete<'a>(&self, id: Uuid, tx: Option<&'a mut PgConnection>) -> AppResult<()> {
        let query = sqlx::query(
            "UPDATE authors SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id);

        // Zero rows affected means the id was unknown or already deleted;
        // the delete is idempotent either way.
        match tx {
            Some(conn) => query.execute(&mut *conn).await?,
            None => query.execute(&self.pool).await?,
        };
        Ok(())
    }
}
