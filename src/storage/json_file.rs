use crate::error::LedgerError;
use crate::storage::{LedgerData, SnapshotStore};
use async_trait::async_trait;
use log::debug;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

/// Snapshot store backed by a single pretty-printed JSON file. The parent
/// directory is created on first use.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    async fn ensure_parent_dir(&self) -> Result<(), LedgerError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| LedgerError::StorageError(e.to_string()))?;
        }
        Ok(())
    }
}

#[async_trait]
impl SnapshotStore for JsonFileStore {
    async fn load(&self) -> Result<LedgerData, LedgerError> {
        self.ensure_parent_dir().await?;

        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No snapshot at {}, starting empty", self.path.display());
                return Ok(LedgerData::new());
            }
            Err(e) => return Err(LedgerError::StorageError(e.to_string())),
        };

        serde_json::from_str(&raw).map_err(|e| LedgerError::StorageError(e.to_string()))
    }

    async fn save(&self, data: &LedgerData) -> Result<(), LedgerError> {
        self.ensure_parent_dir().await?;

        let raw = serde_json::to_string_pretty(data)
            .map_err(|e| LedgerError::StorageError(e.to_string()))?;
        fs::write(&self.path, raw)
            .await
            .map_err(|e| LedgerError::StorageError(e.to_string()))
    }
}
