use crate::error::LedgerError;
use crate::storage::{LedgerData, SnapshotStore};
use async_trait::async_trait;
use tokio::sync::Mutex;

/// Snapshot store kept entirely in memory, for tests and ephemeral runs.
pub struct InMemoryStore {
    snapshot: Mutex<LedgerData>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        InMemoryStore {
            snapshot: Mutex::new(LedgerData::new()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SnapshotStore for InMemoryStore {
    async fn load(&self) -> Result<LedgerData, LedgerError> {
        Ok(self.snapshot.lock().await.clone())
    }

    async fn save(&self, data: &LedgerData) -> Result<(), LedgerError> {
        *self.snapshot.lock().await = data.clone();
        Ok(())
    }
}
