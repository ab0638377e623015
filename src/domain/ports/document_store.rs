use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Whole-document persistence for one logical collection. Every save
/// replaces the collection's document in full; there are no partial
/// updates. Callers must serialize saves to the same collection (each
/// owning service holds its document behind a mutex).
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Load a collection's document, or `None` when no backing state
    /// exists yet.
    async fn load(&self, collection: &str) -> StoreResult<Option<Value>>;

    /// Durably replace a collection's document.
    async fn save(&self, collection: &str, document: &Value) -> StoreResult<()>;
}
