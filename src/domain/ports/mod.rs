pub mod document_store;
pub mod notifier;

pub use document_store::{DocumentStore, StoreError, StoreResult};
pub use notifier::Notifier;
