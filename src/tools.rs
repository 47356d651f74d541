use crate::error::LedgerError;
use crate::logger::AuditLogger;
use crate::service::LedgerService;
use crate::storage::SnapshotStore;
use serde::Deserialize;

/// A tool invocation as produced by the agent's function-calling bridge.
/// The bridge extracts arguments from natural language; by the time a call
/// reaches here it is already typed.
#[derive(Debug, Deserialize)]
#[serde(tag = "name", content = "arguments", rename_all = "snake_case")]
pub enum ToolCall {
    #[serde(rename_all = "camelCase")]
    AddExpense {
        amount: f64,
        description: String,
        paid_by: Option<String>,
    },
    ListExpenses,
    #[serde(rename_all = "camelCase")]
    SplitExpenses { num_people: i64 },
    ClearExpenses,
}

/// Name and natural-language description advertised to the agent layer.
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
}

pub fn tool_specs() -> Vec<ToolSpec> {
    vec![
        ToolSpec {
            name: "add_expense",
            description:
                "Add a new expense to track. Use this when the user mentions spending money or adding an expense.",
        },
        ToolSpec {
            name: "list_expenses",
            description:
                "Get a list of all tracked expenses. Use this when the user asks to see expenses or list what they spent.",
        },
        ToolSpec {
            name: "split_expenses",
            description:
                "Calculate how to split the total expenses among a group of people. Use this when the user asks to split bills or divide expenses.",
        },
        ToolSpec {
            name: "clear_expenses",
            description: "Clear all tracked expenses. Use this when the user wants to reset or clear all expenses.",
        },
    ]
}

/// Run one tool call against the ledger and render the reply the agent sends
/// back to the conversation. Tool replies never raise; failures come back as
/// descriptive strings.
pub async fn dispatch<L: AuditLogger, S: SnapshotStore>(
    service: &LedgerService<L, S>,
    conversation_id: &str,
    call: ToolCall,
) -> String {
    match call {
        ToolCall::AddExpense {
            amount,
            description,
            paid_by,
        } => {
            match service
                .add_expense(conversation_id, amount, &description, paid_by.as_deref())
                .await
            {
                Ok(expense) => format!(
                    "Expense added: {}",
                    serde_json::to_string(&expense).unwrap_or_default()
                ),
                Err(e) => format!("Failed to add expense: {}", e),
            }
        }
        ToolCall::ListExpenses => service.format_expenses(conversation_id).await,
        ToolCall::SplitExpenses { num_people } => {
            match validate_people(num_people) {
                Ok(n) => match service.split(conversation_id, n).await {
                    Ok(result) => format!(
                        "Split result:\nTotal: {} ETH\nPeople: {}\nPer person: {} ETH",
                        result.total, result.num_people, result.per_person
                    ),
                    Err(e) => format!("Failed to split expenses: {}", e),
                },
                Err(e) => format!("Failed to split expenses: {}", e),
            }
        }
        ToolCall::ClearExpenses => match service.clear(conversation_id).await {
            Ok(()) => "All expenses cleared.".to_string(),
            Err(e) => format!("Failed to clear expenses: {}", e),
        },
    }
}

fn validate_people(num_people: i64) -> Result<u32, LedgerError> {
    u32::try_from(num_people)
        .ok()
        .filter(|n| *n > 0)
        .ok_or(LedgerError::InvalidSplitCount(num_people))
}
