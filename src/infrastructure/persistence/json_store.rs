use crate::domain::ports::document_store::{DocumentStore, StoreResult};
use async_trait::async_trait;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Flat-file document store: each collection lives in `<dir>/<name>.json`.
/// Saves write the full document to a sibling temp file and rename it over
/// the target, so a crash mid-write leaves the previous document intact.
/// Concurrent saves to one collection are serialized by the owning service.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, collection: &str) -> PathBuf {
        self.dir.join(format!("{}.json", collection))
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    async fn load(&self, collection: &str) -> StoreResult<Option<Value>> {
        match tokio::fs::read(self.path(collection)).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, collection: &str, document: &Value) -> StoreResult<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let bytes = serde_json::to_vec_pretty(document)?;
        let tmp = self.dir.join(format!("{}.json.tmp", collection));
        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, self.path(collection)).await?;
        Ok(())
    }
}
