pub mod in_memory;
pub mod json_file;

use crate::error::LedgerError;
use crate::models::Expense;
use async_trait::async_trait;
use std::collections::HashMap;

/// Conversation id -> ordered expense list. The service owns the live map;
/// a store only holds snapshots of it.
pub type LedgerData = HashMap<String, Vec<Expense>>;

#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Load the full mapping. A store with no data yet returns an empty map.
    async fn load(&self) -> Result<LedgerData, LedgerError>;

    /// Overwrite the durable snapshot with the full mapping.
    async fn save(&self, data: &LedgerData) -> Result<(), LedgerError>;
}
