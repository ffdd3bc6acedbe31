//! Standard response envelope

use serde::Serialize;
use serde_json::Value;

use super::code::ResponseCode;

/// Envelope returned by every endpoint: `{code, message, data?}`.
/// `data` is dropped from the body when absent.
#[derive(Debug, Serialize)]
pub struct BaseResponse<T> {
    pub code: ResponseCode,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> BaseResponse<T> {
    pub fn new(code: ResponseCode, data: Option<T>) -> Self {
        Self {
            code,
            message: code.message(),
            data,
        }
    }
}

impl BaseResponse<Value> {
    /// Envelope with no payload, for mutation results and error bodies.
    pub fn empty(code: ResponseCode) -> Self {
        Self::new(code, None)
    }
}
