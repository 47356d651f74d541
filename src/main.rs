use env_logger::Env;
use log::info;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tripledger::config::CONFIG;
use tripledger::tools::{self, ToolCall};
use tripledger::{InMemoryAuditLog, JsonFileStore, LedgerService};

// Local stand-in for the messaging layer: one stdin session maps to one
// conversation, and each line is parsed into a tool call the same way the
// function-calling bridge would supply one.
const CONVERSATION_ID: &str = "local";

fn parse_command(line: &str) -> Option<ToolCall> {
    let mut parts = line.split_whitespace();
    match parts.next()? {
        "add" => {
            let amount: f64 = parts.next()?.parse().ok()?;
            let rest: Vec<&str> = parts.collect();
            // Trailing "by <payer>" names who paid.
            let (description, paid_by) = match rest.iter().rposition(|w| *w == "by") {
                Some(pos) if pos + 1 < rest.len() => {
                    (rest[..pos].join(" "), Some(rest[pos + 1..].join(" ")))
                }
                _ => (rest.join(" "), None),
            };
            Some(ToolCall::AddExpense {
                amount,
                description,
                paid_by,
            })
        }
        "list" => Some(ToolCall::ListExpenses),
        "split" => {
            let num_people: i64 = parts.next()?.parse().ok()?;
            Some(ToolCall::SplitExpenses { num_people })
        }
        "clear" => Some(ToolCall::ClearExpenses),
        _ => None,
    }
}

fn usage() -> String {
    let mut out = String::from("Commands:\n");
    out.push_str("  add <amount> <description> [by <payer>]\n");
    out.push_str("  list\n  split <people>\n  clear\n  quit\n\nTools:\n");
    for spec in tools::tool_specs() {
        out.push_str(&format!("  {} - {}\n", spec.name, spec.description));
    }
    out
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or(CONFIG.log_level.as_str()))
        .init();

    let storage = JsonFileStore::new(CONFIG.data_file.as_str());
    let logging = InMemoryAuditLog::new();
    let ledger = LedgerService::load(storage, logging).await;
    info!("Expense ledger ready, data file: {}", CONFIG.data_file);

    let mut stdout = tokio::io::stdout();
    stdout.write_all(usage().as_bytes()).await?;
    stdout.write_all(b"\n> ").await?;
    stdout.flush().await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            stdout.write_all(b"> ").await?;
            stdout.flush().await?;
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }

        let reply = match parse_command(line) {
            Some(call) => tools::dispatch(&ledger, CONVERSATION_ID, call).await,
            None => usage(),
        };
        stdout.write_all(reply.as_bytes()).await?;
        stdout.write_all(b"\n> ").await?;
        stdout.flush().await?;
    }

    Ok(())
}
