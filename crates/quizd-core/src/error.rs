//! Shared error type across quizd crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed request parameter or answer field.
    BadRequest,
    /// A metric name collided during registration.
    DuplicateMetric,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::DuplicateMetric => "DUPLICATE_METRIC",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, QuizdError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum QuizdError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("duplicate metric name: {0}")]
    DuplicateMetric(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl QuizdError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            QuizdError::BadRequest(_) => ClientCode::BadRequest,
            QuizdError::DuplicateMetric(_) => ClientCode::DuplicateMetric,
            QuizdError::Internal(_) => ClientCode::Internal,
        }
    }
}
