//! Author API endpoints

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
    models::author::{AuthorResponse, CreateAuthorRequest, UpdateAuthorRequest},
    validation::ValidateRequest,
    AppState,
};

/// Create an author
pub async fn create_author(
    State(state): State<AppState>,
    payload: Result<Json<CreateAuthorRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<BaseResponse<AuthorResponse>>)> {
    let Json(req) = payload.map_err(|rejection| AppError::Binding(rejection.body_text()))?;
    let errors = req.validation_messages();
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let author = state.services.authors.create(&req).await?;
    Ok((
        StatusCode::CREATED,
        Json(BaseResponse::new(
            ResponseCode::Created,
            Some(author.into()),
        )),
    ))
}

/// Get an author by id. An unknown id is a success with no data.
pub async fn get_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<BaseResponse<AuthorResponse>>> {
    let id = parse_id(&id)?;
    let author = state.services.authors.get_by_id(id).await?;
    Ok(Json(BaseResponse::new(
        ResponseCode::Success,
        author.map(AuthorResponse::from),
    )))
}

/// List authors with pagination
pub async fn get_all_authors(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<BaseResponse<PaginatedData<AuthorResponse>>>> {
    let pagination = parse_pagination(&query)?;
    let page = state.services.authors.get_all(&pagination).await?;
    Ok(Json(BaseResponse::new(
        ResponseCode::Success,
        Some(page.map(AuthorResponse::from)),
    )))
}

/// Update an author (full replacement)
pub async fn update_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateAuthorRequest>, JsonRejection>,
) -> AppResult<Json<BaseResponse<Value>>> {
    let id = parse_id(&id)?;
    let Json(req) = payload.map_err(|rejection| AppError::Binding(rejection.body_text()))?;
    let errors = req.validation_messages();
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    state.services.authors.update(id, &req).await?;
    Ok(Json(BaseResponse::empty(ResponseCode::Updated)))
}

/// Delete an author
pub async fn delete_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<BaseResponse<Value>>> {
    let id = parse_id(&id)?;
    state.services.authors.delete(id).await?;
    Ok(Json(BaseResponse::empty(ResponseCode::Deleted)))
}
