//! Pagination contract: query parsing, offset/limit, page-count derivation

use serde::Serialize;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Parsed pagination parameters. Always usable: fields fall back to their
/// defaults on bad input, but `parse` also reports a message per bad field
/// and callers must reject the request when any message is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationRequest {
    pub page: i64,
    pub page_size: i64,
}

impl PaginationRequest {
    /// Parse raw `page` / `pageSize` query values. Absent or empty values
    /// take the defaults. The upper bound on page size is left to request
    /// validation, not enforced here.
    pub fn parse(page: Option<&str>, page_size: Option<&str>) -> (Self, Vec<String>) {
        let mut errors = Vec::new();
        let mut pagination = Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        };

        if let Some(raw) = page.filter(|raw| !raw.is_empty()) {
            match raw.parse::<i64>() {
                Ok(page) if page > 0 => pagination.page = page,
                _ => errors.push("Page must be greater than 0".to_string()),
            }
        }

        if let Some(raw) = page_size.filter(|raw| !raw.is_empty()) {
            match raw.parse::<i64>() {
                Ok(page_size) if page_size > 0 => pagination.page_size = page_size,
                _ => errors.push("Page size must be greater than 0".to_string()),
            }
        }

        (pagination, errors)
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.page_size
    }

    pub fn limit(&self) -> i64 {
        self.page_size
    }
}

/// Pagination metadata echoed back on every list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationResponse {
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
    pub total_items: i64,
}

impl PaginationResponse {
    /// totalPages is clamped to a minimum of 1 so an empty result still
    /// renders as "page 1 of 1".
    pub fn new(request: &PaginationRequest, total_items: i64) -> Self {
        let total_pages = ((total_items + request.page_size - 1) / request.page_size).max(1);
        Self {
            page: request.page,
            page_size: request.page_size,
            total_pages,
            total_items,
        }
    }
}

/// A page of items together with its pagination metadata.
#[derive(Debug, Serialize)]
pub struct PaginatedData<T> {
    pub items: Vec<T>,
    pub pagination: PaginationResponse,
}

impl<T> PaginatedData<T> {
    pub fn new(items: Vec<T>, request: &PaginationRequest, total_items: i64) -> Self {
        Self {
            items,
            pagination: PaginationResponse::new(request, total_items),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginatedData<U> {
        PaginatedData {
            items: self.items.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }
}
