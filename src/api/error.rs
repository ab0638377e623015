use crate::domain::errors::DomainError;
use std::fmt;

/// Caller-facing outcome classes: validation failures, missing entities,
/// booking conflicts, and internal faults. An HTTP layer maps these onto
/// 400/404/409/500 responses.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Storage(e) => {
                tracing::error!(error = %e, "persistence fault");
                ApiError::Internal("Internal server error".to_string())
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
