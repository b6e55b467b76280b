use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A practice exercise recommended by upstream scoring.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Display string, e.g. "5 minutes daily".
    pub duration: String,
    /// Display string, e.g. "Reduces anticipatory tension".
    pub benefit: String,
    #[serde(default)]
    pub steps: Vec<String>,
}
