use serde::Serialize;

/// Even division of a conversation's total among a group. The monetary
/// figures are display-ready strings with fixed decimal precision.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitResult {
    pub total: String,
    pub num_people: u32,
    pub per_person: String,
}
