use serde::Serialize;
use ts_rs::TS;

use vocalis_core::models::patient::PatientRecord;
use vocalis_core::models::profile::ProfileType;

/// How many of the most frequent triggers to report.
pub const TOP_TRIGGER_LIMIT: usize = 5;

/// Dashboard summary over the full (unfiltered) patient set.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct Stats {
    pub total: usize,
    /// One entry per known tier, in display order. Pending and unrecognized
    /// tiers belong to no bucket, so counts can sum below `total`.
    pub tiers: Vec<TierStat>,
    /// Mean risk score, pending records counting as 0.
    pub avg_risk_score: u8,
    pub top_triggers: Vec<TriggerStat>,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct TierStat {
    pub tier: ProfileType,
    pub count: usize,
    /// Share of `total`, rounded half-up. 0 when there are no records.
    pub percent: u8,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct TriggerStat {
    pub trigger: String,
    pub count: usize,
}

/// Summarize a record set: totals, tier distribution, average risk score,
/// and the most frequent triggers.
pub fn summarize(records: &[PatientRecord]) -> Stats {
    let total = records.len();

    let tiers = ProfileType::KNOWN
        .iter()
        .map(|&tier| {
            let count = records
                .iter()
                .filter(|r| r.profile_type() == Some(tier))
                .count();
            TierStat {
                tier,
                count,
                percent: percent_of(count, total),
            }
        })
        .collect();

    let avg_risk_score = if total == 0 {
        0
    } else {
        let sum: u32 = records.iter().map(|r| u32::from(r.risk_score())).sum();
        (f64::from(sum) / total as f64).round() as u8
    };

    Stats {
        total,
        tiers,
        avg_risk_score,
        top_triggers: top_triggers(records),
    }
}

fn percent_of(count: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (count as f64 / total as f64 * 100.0).round() as u8
}

/// Tally trigger occurrences across all records. Ties keep first-encountered
/// order: the tally list is built in insertion order and the sort is stable.
fn top_triggers(records: &[PatientRecord]) -> Vec<TriggerStat> {
    let mut tallies: Vec<TriggerStat> = Vec::new();
    for record in records {
        let Some(result) = &record.result else {
            continue;
        };
        for trigger in &result.triggers {
            match tallies.iter_mut().find(|t| t.trigger == *trigger) {
                Some(entry) => entry.count += 1,
                None => tallies.push(TriggerStat {
                    trigger: trigger.clone(),
                    count: 1,
                }),
            }
        }
    }

    tallies.sort_by(|a, b| b.count.cmp(&a.count));
    tallies.truncate(TOP_TRIGGER_LIMIT);
    tallies
}
