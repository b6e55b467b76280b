use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A support-network signup. Written by the landing page, read-only here.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CommunityMember {
    pub id: String,
    pub email: String,
    pub phone: Option<String>,
    pub joined_at: jiff::Timestamp,
}
