use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Uniform failure shape for every remote call: the HTTP status code (or 500
/// for transport failures) and a best-effort message.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{code}: {message}")]
pub struct ApiError {
    pub code: u16,
    pub message: String,
}

impl ApiError {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Network/transport failures carry no HTTP status and are reported as 500.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(500, message)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::transport(err.to_string())
    }
}

/// Result type alias for remote operations
pub type ApiResult<T> = Result<T, ApiError>;
