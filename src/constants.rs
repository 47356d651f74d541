/// Payer recorded when the caller does not name one.
pub const DEFAULT_PAYER: &str = "user";

/// Fractional digits used for display-ready totals and per-person shares.
pub const AMOUNT_DECIMALS: usize = 6;

/// Reply for conversations with nothing tracked.
pub const NO_EXPENSES_MESSAGE: &str = "No expenses tracked!";

// Audit action names.
pub const EXPENSE_ADDED: &str = "expense_added";
pub const EXPENSES_SPLIT: &str = "expenses_split";
pub const EXPENSES_CLEARED: &str = "expenses_cleared";
