use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::exercise::Exercise;
use super::profile::ProfileType;

/// Scoring output computed upstream. Scores are integers in [0, 100].
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ResultData {
    pub risk_score: u8,
    pub emotion_score: u8,
    pub function_score: u8,
    pub profile_type: ProfileType,
    pub profile_label: String,
    #[serde(default)]
    pub triggers: Vec<String>,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}
