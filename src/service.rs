use crate::constants::{
    AMOUNT_DECIMALS, DEFAULT_PAYER, EXPENSE_ADDED, EXPENSES_CLEARED, EXPENSES_SPLIT,
    NO_EXPENSES_MESSAGE,
};
use crate::error::LedgerError;
use crate::logger::AuditLogger;
use crate::models::{Expense, SplitResult};
use crate::storage::{LedgerData, SnapshotStore};
use log::{debug, info, warn};
use serde_json::json;
use tokio::sync::Mutex;

/// Per-conversation expense ledger. Owns the in-memory mapping and snapshots
/// the whole of it to the store on every mutation.
///
/// The single mutex covers read-modify-persist, so two concurrent mutations
/// cannot interleave and lose each other's keys through the whole-map
/// overwrite.
pub struct LedgerService<L: AuditLogger, S: SnapshotStore> {
    expenses: Mutex<LedgerData>,
    storage: S,
    logging: L,
}

impl<L: AuditLogger, S: SnapshotStore> LedgerService<L, S> {
    /// Build the service from whatever the store currently holds. A failed
    /// load starts the ledger empty rather than taking the process down.
    pub async fn load(storage: S, logging: L) -> Self {
        let expenses = match storage.load().await {
            Ok(data) => {
                info!("Loaded expenses for {} conversation(s)", data.len());
                data
            }
            Err(e) => {
                warn!("Failed to load expenses, starting empty: {}", e);
                LedgerData::new()
            }
        };

        LedgerService {
            expenses: Mutex::new(expenses),
            storage,
            logging,
        }
    }

    pub async fn add_expense(
        &self,
        conversation_id: &str,
        amount: f64,
        description: &str,
        paid_by: Option<&str>,
    ) -> Result<Expense, LedgerError> {
        if conversation_id.trim().is_empty() {
            return Err(LedgerError::MissingConversationId);
        }
        if description.trim().is_empty() {
            return Err(LedgerError::MissingDescription);
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(LedgerError::InvalidAmount(amount));
        }

        let expense = Expense::new(
            amount,
            description.to_string(),
            paid_by.unwrap_or(DEFAULT_PAYER).to_string(),
        );

        {
            let mut expenses = self.expenses.lock().await;
            expenses
                .entry(conversation_id.to_string())
                .or_default()
                .push(expense.clone());
            self.persist(&expenses).await;
        }
        debug!(
            "Added expense {} ({} ETH) to conversation {}",
            expense.id, expense.amount, conversation_id
        );

        self.logging
            .log_action(
                EXPENSE_ADDED,
                json!({
                    "expense_id": &expense.id,
                    "amount": expense.amount,
                    "description": &expense.description,
                    "paid_by": &expense.paid_by,
                }),
                Some(conversation_id),
            )
            .await?;

        Ok(expense)
    }

    /// Expenses in the order they were added; empty for unknown conversations.
    pub async fn get_expenses(&self, conversation_id: &str) -> Vec<Expense> {
        self.expenses
            .lock()
            .await
            .get(conversation_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Summed fresh on every call, never cached.
    pub async fn get_total(&self, conversation_id: &str) -> f64 {
        self.expenses
            .lock()
            .await
            .get(conversation_id)
            .map(|list| list.iter().map(|e| e.amount).sum())
            .unwrap_or(0.0)
    }

    pub async fn split(
        &self,
        conversation_id: &str,
        num_people: u32,
    ) -> Result<SplitResult, LedgerError> {
        if num_people == 0 {
            return Err(LedgerError::InvalidSplitCount(0));
        }

        let total = self.get_total(conversation_id).await;
        let per_person = total / num_people as f64;
        let result = SplitResult {
            total: format!("{:.*}", AMOUNT_DECIMALS, total),
            num_people,
            per_person: format!("{:.*}", AMOUNT_DECIMALS, per_person),
        };
        debug!(
            "Split conversation {} between {} people: {} each",
            conversation_id, num_people, result.per_person
        );

        self.logging
            .log_action(
                EXPENSES_SPLIT,
                json!({ "total": &result.total, "num_people": num_people, "per_person": &result.per_person }),
                Some(conversation_id),
            )
            .await?;

        Ok(result)
    }

    /// Drops the conversation's key entirely and persists. A no-op (beyond a
    /// redundant persist) for conversations with nothing tracked.
    pub async fn clear(&self, conversation_id: &str) -> Result<(), LedgerError> {
        {
            let mut expenses = self.expenses.lock().await;
            expenses.remove(conversation_id);
            self.persist(&expenses).await;
        }
        debug!("Cleared expenses for conversation {}", conversation_id);

        self.logging
            .log_action(EXPENSES_CLEARED, json!({}), Some(conversation_id))
            .await?;

        Ok(())
    }

    /// Human-readable summary: running total header plus one line per record.
    pub async fn format_expenses(&self, conversation_id: &str) -> String {
        let expenses = self.get_expenses(conversation_id).await;
        if expenses.is_empty() {
            return NO_EXPENSES_MESSAGE.to_string();
        }

        let total: f64 = expenses.iter().map(|e| e.amount).sum();
        let mut output = format!("Expenses: total {:.*} ETH\n\n", AMOUNT_DECIMALS, total);
        for (idx, exp) in expenses.iter().enumerate() {
            output.push_str(&format!(
                "{}. {}: {} ETH (paid by: {})\n",
                idx + 1,
                exp.description,
                exp.amount,
                exp.paid_by
            ));
        }
        output
    }

    pub async fn audit_entries(&self) -> Result<Vec<crate::models::AuditEntry>, LedgerError> {
        self.logging.get_entries().await
    }

    /// Best-effort snapshot write. On failure the in-memory mutation is kept;
    /// memory and disk diverge until the next successful save.
    async fn persist(&self, data: &LedgerData) {
        if let Err(e) = self.storage.save(data).await {
            warn!("Failed to persist expenses: {}", e);
        }
    }
}
