use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::answer::Answer;
use super::profile::ProfileType;
use super::result::ResultData;

/// One assessment submission, as written by the questionnaire backend.
///
/// `result` is absent until upstream scoring completes; such a record is
/// *pending*, not zero-risk. The score accessors below apply the
/// pending-as-zero display convention where the dashboard calls for it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PatientRecord {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
    #[serde(default)]
    pub answers: Vec<Answer>,
    #[serde(default)]
    pub result: Option<ResultData>,
}

impl PatientRecord {
    /// Risk score, reading 0 while scoring is pending.
    pub fn risk_score(&self) -> u8 {
        self.result.as_ref().map_or(0, |r| r.risk_score)
    }

    /// Emotion score, reading 0 while scoring is pending.
    pub fn emotion_score(&self) -> u8 {
        self.result.as_ref().map_or(0, |r| r.emotion_score)
    }

    /// Function score, reading 0 while scoring is pending.
    pub fn function_score(&self) -> u8 {
        self.result.as_ref().map_or(0, |r| r.function_score)
    }

    /// Risk tier, `None` while scoring is pending.
    pub fn profile_type(&self) -> Option<ProfileType> {
        self.result.as_ref().map(|r| r.profile_type)
    }
}
