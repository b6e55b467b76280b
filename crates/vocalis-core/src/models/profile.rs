use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

/// Risk tier assigned by upstream scoring.
///
/// `Unknown` absorbs unrecognized upstream tags on decode. It belongs to no
/// distribution bucket and no filter set; only the three named tiers are
/// offered anywhere in the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum ProfileType {
    LowRisk,
    ModerateRisk,
    HighRisk,
    Unknown,
}

impl ProfileType {
    /// The closed set of tiers, in display order.
    pub const KNOWN: [ProfileType; 3] = [
        ProfileType::LowRisk,
        ProfileType::ModerateRisk,
        ProfileType::HighRisk,
    ];

    /// Map an upstream tag to a tier, folding anything unrecognized into
    /// `Unknown` rather than failing the record.
    pub fn from_tag(tag: &str) -> ProfileType {
        match tag {
            "low-risk" => ProfileType::LowRisk,
            "moderate-risk" => ProfileType::ModerateRisk,
            "high-risk" => ProfileType::HighRisk,
            _ => ProfileType::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileType::LowRisk => "low-risk",
            ProfileType::ModerateRisk => "moderate-risk",
            ProfileType::HighRisk => "high-risk",
            ProfileType::Unknown => "unknown",
        }
    }
}

impl<'de> Deserialize<'de> for ProfileType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(ProfileType::from_tag(&tag))
    }
}

impl std::fmt::Display for ProfileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
