use crate::error::LedgerError;
use crate::logger::AuditLogger;
use crate::models::AuditEntry;
use async_trait::async_trait;

pub struct InMemoryAuditLog {
    entries: tokio::sync::Mutex<Vec<AuditEntry>>,
}

impl InMemoryAuditLog {
    pub fn new() -> Self {
        InMemoryAuditLog {
            entries: tokio::sync::Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryAuditLog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuditLogger for InMemoryAuditLog {
    async fn log_action(
        &self,
        action: &str,
        details: serde_json::Value,
        conversation_id: Option<&str>,
    ) -> Result<(), LedgerError> {
        let mut entries = self.entries.lock().await;
        entries.push(AuditEntry::new(action, details, conversation_id));
        Ok(())
    }

    async fn get_entries(&self) -> Result<Vec<AuditEntry>, LedgerError> {
        Ok(self.entries.lock().await.clone())
    }
}
