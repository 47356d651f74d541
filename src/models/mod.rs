pub mod audit;
pub mod expense;
pub mod split;

pub use audit::AuditEntry;
pub use expense::Expense;
pub use split::SplitResult;
