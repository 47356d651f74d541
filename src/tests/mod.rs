mod ledger_tests;

use crate::logger::in_memory::InMemoryAuditLog;
use crate::service::LedgerService;
use crate::storage::in_memory::InMemoryStore;

pub async fn create_test_service() -> LedgerService<InMemoryAuditLog, InMemoryStore> {
    let storage = InMemoryStore::new();
    let logging = InMemoryAuditLog::new();
    LedgerService::load(storage, logging).await
}
