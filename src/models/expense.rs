use chrono::Utc;
use serde::{Deserialize, Serialize};

/// One tracked spend event. Field names match the on-disk JSON format.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub amount: f64,
    pub description: String,
    pub paid_by: String,
    pub timestamp: String,
}

impl Expense {
    /// Stamps the record with the creation-time clock: a millisecond reading
    /// as the id and an RFC 3339 timestamp.
    pub fn new(amount: f64, description: String, paid_by: String) -> Self {
        let now = Utc::now();
        Expense {
            id: now.timestamp_millis().to_string(),
            amount,
            description,
            paid_by,
            timestamp: now.to_rfc3339(),
        }
    }
}
