use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
pub enum LedgerError {
    /// Conversation id is empty
    #[error("Conversation id is required")]
    MissingConversationId,

    /// Expense description is empty
    #[error("Description is required")]
    MissingDescription,

    /// Amount is zero, negative, or not a finite number
    #[error("Invalid amount: {0}")]
    InvalidAmount(f64),

    /// Split requested across zero or negative people
    #[error("Cannot split between {0} people")]
    InvalidSplitCount(i64),

    /// Durable snapshot read or write failed
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Audit logging failed
    #[error("Logging error: {0}")]
    LoggingError(String),
}
