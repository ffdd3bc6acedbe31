//! Shared data transfer types: result codes, response envelope, pagination

pub mod code;
pub mod pagination;
pub mod response;

pub use code::{status_from_code, ResponseCode};
pub use pagination::{PaginatedData, PaginationRequest, PaginationResponse};
pub use response::BaseResponse;
