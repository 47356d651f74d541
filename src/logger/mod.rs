pub mod in_memory;

use crate::error::LedgerError;
use crate::models::AuditEntry;
use async_trait::async_trait;

#[async_trait]
pub trait AuditLogger: Send + Sync {
    async fn log_action(
        &self,
        action: &str,
        details: serde_json::Value,
        conversation_id: Option<&str>,
    ) -> Result<(), LedgerError>;

    async fn get_entries(&self) -> Result<Vec<AuditEntry>, LedgerError>;
}
