use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize)]
pub struct AuditEntry {
    pub id: String,
    pub action: String,
    pub conversation_id: Option<String>,
    pub details: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

impl AuditEntry {
    pub fn new(action: &str, details: serde_json::Value, conversation_id: Option<&str>) -> Self {
        AuditEntry {
            id: Uuid::new_v4().to_string(),
            action: action.to_string(),
            conversation_id: conversation_id.map(String::from),
            details,
            timestamp: Utc::now(),
        }
    }
}
