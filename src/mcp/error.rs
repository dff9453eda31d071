//! Mapping of domain errors onto JSON-RPC error responses.
//!
//! Only prompt-template callbacks surface these; tool callbacks convert
//! failures to `isError` results instead.

use rmcp::model::ErrorCode;
use rmcp::ErrorData;
use serde_json::json;

use crate::error::PromptuaryError;

/// Custom JSON-RPC error codes (in the -32000..-32099 server range).
pub mod error_codes {
    pub const VALIDATION_FAILED: i32 = -32003;
    pub const UPSTREAM_REQUEST_FAILED: i32 = -32010;
    pub const INTERNAL_ERROR: i32 = -32011;
}

fn error_code(err: &PromptuaryError) -> i32 {
    match err {
        PromptuaryError::Validation { .. } => error_codes::VALIDATION_FAILED,
        PromptuaryError::Request { .. } => error_codes::UPSTREAM_REQUEST_FAILED,
        PromptuaryError::Http(_)
        | PromptuaryError::Json(_)
        | PromptuaryError::Url(_)
        | PromptuaryError::Io(_) => error_codes::INTERNAL_ERROR,
    }
}

fn error_type(err: &PromptuaryError) -> &'static str {
    match err {
        PromptuaryError::Validation { .. } => "ValidationError",
        PromptuaryError::Request { .. } => "RequestError",
        PromptuaryError::Http(_) => "HttpError",
        PromptuaryError::Json(_) => "JsonError",
        PromptuaryError::Url(_) => "UrlError",
        PromptuaryError::Io(_) => "IoError",
    }
}

impl From<PromptuaryError> for ErrorData {
    fn from(err: PromptuaryError) -> Self {
        ErrorData {
            code: ErrorCode(error_code(&err)),
            message: err.to_string().into(),
            data: Some(json!({ "error_type": error_type(&err) })),
        }
    }
}
