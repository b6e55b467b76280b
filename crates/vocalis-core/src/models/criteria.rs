use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::profile::ProfileType;

/// An inclusive score bound pair. Edits are clamped, never rejected, so the
/// invariant `0 <= min <= max <= 100` holds after any mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    min: u8,
    max: u8,
}

/// Wire form of [`ScoreRange`]; out-of-range values are clamped on decode,
/// matching the silent-correction policy for filter input.
#[derive(Deserialize)]
struct RawScoreRange {
    min: i64,
    max: i64,
}

impl<'de> serde::Deserialize<'de> for ScoreRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawScoreRange::deserialize(deserializer)?;
        Ok(ScoreRange::new(raw.min, raw.max))
    }
}

impl ScoreRange {
    pub const FULL: ScoreRange = ScoreRange { min: 0, max: 100 };

    /// Build a range, clamping `min` into [0, 100] and `max` into [min, 100].
    pub fn new(min: i64, max: i64) -> Self {
        let min = min.clamp(0, 100) as u8;
        let max = max.clamp(min as i64, 100) as u8;
        ScoreRange { min, max }
    }

    pub fn min(&self) -> u8 {
        self.min
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    /// Clamp `value` into [0, current max] and take it as the new minimum.
    pub fn set_min(&mut self, value: i64) {
        self.min = value.clamp(0, self.max as i64) as u8;
    }

    /// Clamp `value` into [current min, 100] and take it as the new maximum.
    pub fn set_max(&mut self, value: i64) {
        self.max = value.clamp(self.min as i64, 100) as u8;
    }

    pub fn contains(&self, score: u8) -> bool {
        self.min <= score && score <= self.max
    }

    pub fn is_full(&self) -> bool {
        *self == ScoreRange::FULL
    }
}

impl Default for ScoreRange {
    fn default() -> Self {
        ScoreRange::FULL
    }
}

/// Everything the filter panel can constrain. Defaults are all unrestricted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct FilterCriteria {
    pub search: String,
    pub profile_types: Vec<ProfileType>,
    pub risk_score: ScoreRange,
    pub emotion_score: ScoreRange,
    pub function_score: ScoreRange,
    pub date_from: Option<jiff::civil::Date>,
    pub date_to: Option<jiff::civil::Date>,
}

/// A criteria field holding a non-default value. The filter badge in the
/// dashboard counts these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ActiveFilter {
    Search,
    ProfileTypes,
    RiskScore,
    EmotionScore,
    FunctionScore,
    DateFrom,
    DateTo,
}

impl FilterCriteria {
    /// The fields currently constraining the record set.
    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        let mut active = Vec::new();
        if !self.search.is_empty() {
            active.push(ActiveFilter::Search);
        }
        if !self.profile_types.is_empty() {
            active.push(ActiveFilter::ProfileTypes);
        }
        if !self.risk_score.is_full() {
            active.push(ActiveFilter::RiskScore);
        }
        if !self.emotion_score.is_full() {
            active.push(ActiveFilter::EmotionScore);
        }
        if !self.function_score.is_full() {
            active.push(ActiveFilter::FunctionScore);
        }
        if self.date_from.is_some() {
            active.push(ActiveFilter::DateFrom);
        }
        if self.date_to.is_some() {
            active.push(ActiveFilter::DateTo);
        }
        active
    }

    pub fn is_default(&self) -> bool {
        self.active_filters().is_empty()
    }
}
