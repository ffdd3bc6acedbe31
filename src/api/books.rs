//! Book API endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use super::{parse_id, parse_pagination, PageQuery};
use crate::{
    dto::{BaseResponse, PaginatedData, ResponseCode},
    error::{AppError, AppResult},
    models::book::{BookResponse, CreateBookRequest, UpdateBookRequest},
    validation::ValidateRequest,
    AppState,
};

/// Create a book
pub async fn create_book(
    State(state): State<AppState>,
    payload: Result<Json<CreateBookRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<BaseResponse<BookResponse>>)> {
    let Json(req) = payload.map_err(|rejection| AppError::Binding(rejection.body_text()))?;
    let errors = req.validation_messages();
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let book = state.services.books.create(&req).await?;
    Ok((
        StatusCode::CREATED,
        Json(BaseResponse::new(ResponseCode::Created, Some(book.into()))),
    ))
}

/// Get a book by id, with its author attached when it resolves
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<BaseResponse<BookResponse>>> {
    let id = parse_id(&id)?;
    let book = state.services.books.get_by_id(id).await?;
    Ok(Json(BaseResponse::new(
        ResponseCode::Success,
        Some(book.into()),
    )))
}

/// List one author's books with pagination
pub async fn get_books_by_author(
    State(state): State<AppState>,
    Path(author_id): Path<String>,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<BaseResponse<PaginatedData<BookResponse>>>> {
    let author_id = parse_id(&author_id)?;
    let pagination = parse_pagination(&query)?;
    let page = state
        .services
        .books
        .get_by_author_id(author_id, &pagination)
        .await?;
    Ok(Json(BaseResponse::new(
        ResponseCode::Success,
        Some(page.map(BookResponse::from)),
    )))
}

/// List books with pagination
pub async fn get_all_books(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<BaseResponse<PaginatedData<BookResponse>>>> {
    let pagination = parse_pagination(&query)?;
    let page = state.services.books.get_all(&pagination).await?;
    Ok(Json(BaseResponse::new(
        ResponseCode::Success,
        Some(page.map(BookResponse::from)),
    )))
}

/// Update a book (full replacement)
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateBookRequest>, JsonRejection>,
) -> AppResult<Json<BaseResponse<Value>>> {
    let id = parse_id(&id)?;
    let Json(req) = payload.map_err(|rejection| AppError::Binding(rejection.body_text()))?;
    let errors = req.validation_messages();
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    state.services.books.update(id, &req).await?;
    Ok(Json(BaseResponse::empty(ResponseCode::Updated)))
}

/// Delete a book
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<BaseResponse<Value>>> {
    let id = parse_id(&id)?;
    state.services.books.delete(id).await?;
    Ok(Json(BaseResponse::empty(ResponseCode::Deleted)))
}
