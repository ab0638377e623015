use crate::domain::ports::document_store::StoreError;
use thiserror::Error;

/// Failures surfaced by the core services. Not-found and booking conflicts
/// are not errors here; the services report them as `Ok(false)` sentinels
/// and the boundary layer maps them to responses.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}

pub type DomainResult<T> = Result<T, DomainError>;
