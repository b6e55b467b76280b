use vocalis_core::models::patient::PatientRecord;
use vocalis_core::models::profile::ProfileType;
use vocalis_core::models::result::ResultData;
use vocalis_search::stats::{self, TOP_TRIGGER_LIMIT};

fn record(id: &str, result: Option<ResultData>) -> PatientRecord {
    let now: jiff::Timestamp = "2025-03-01T12:00:00Z".parse().unwrap();
    PatientRecord {
        id: id.to_string(),
        name: Some(format!("Patient {id}")),
        email: Some(format!("{id}@example.com")),
        phone: None,
        created_at: now,
        updated_at: now,
        answers: Vec::new(),
        result,
    }
}

fn scored(risk: u8, tier: ProfileType, triggers: &[&str]) -> ResultData {
    ResultData {
        risk_score: risk,
        emotion_score: 50,
        function_score: 50,
        profile_type: tier,
        profile_label: tier.as_str().to_string(),
        triggers: triggers.iter().map(|t| t.to_string()).collect(),
        exercises: Vec::new(),
    }
}

#[test]
fn empty_set_summarizes_to_zeros() {
    let summary = stats::summarize(&[]);
    assert_eq!(summary.total, 0);
    assert_eq!(summary.avg_risk_score, 0);
    assert!(summary.top_triggers.is_empty());
    for tier in &summary.tiers {
        assert_eq!(tier.count, 0);
        assert_eq!(tier.percent, 0);
    }
}

#[test]
fn tier_counts_exclude_pending_records() {
    let records = vec![
        record("a", Some(scored(20, ProfileType::LowRisk, &[]))),
        record("b", Some(scored(25, ProfileType::LowRisk, &[]))),
        record("c", Some(scored(90, ProfileType::HighRisk, &[]))),
        record("d", None),
    ];
    let summary = stats::summarize(&records);

    assert_eq!(summary.total, 4);
    let counted: usize = summary.tiers.iter().map(|t| t.count).sum();
    assert!(counted <= summary.total);
    assert_eq!(counted, 3);

    let low = summary
        .tiers
        .iter()
        .find(|t| t.tier == ProfileType::LowRisk)
        .unwrap();
    assert_eq!(low.count, 2);
    assert_eq!(low.percent, 50);

    let moderate = summary
        .tiers
        .iter()
        .find(|t| t.tier == ProfileType::ModerateRisk)
        .unwrap();
    assert_eq!(moderate.count, 0);
    assert_eq!(moderate.percent, 0);
}

#[test]
fn percentages_round_half_up() {
    let mut records = vec![record("a", Some(scored(10, ProfileType::LowRisk, &[])))];
    for i in 0..7 {
        records.push(record(&format!("p{i}"), None));
    }
    // 1 of 8 is 12.5%, which rounds up to 13.
    let summary = stats::summarize(&records);
    let low = summary
        .tiers
        .iter()
        .find(|t| t.tier == ProfileType::LowRisk)
        .unwrap();
    assert_eq!(low.percent, 13);
}

#[test]
fn average_risk_counts_pending_as_zero() {
    let records = vec![
        record("a", Some(scored(40, ProfileType::LowRisk, &[]))),
        record("b", Some(scored(60, ProfileType::ModerateRisk, &[]))),
        record("c", None),
    ];
    // (40 + 60 + 0) / 3 = 33.3, which rounds to 33.
    assert_eq!(stats::summarize(&records).avg_risk_score, 33);
}

#[test]
fn triggers_rank_by_frequency() {
    let records = vec![
        record("a", Some(scored(50, ProfileType::ModerateRisk, &["speaking-in-public"]))),
        record(
            "b",
            Some(scored(
                60,
                ProfileType::ModerateRisk,
                &["speaking-in-public", "phone-calls"],
            )),
        ),
    ];
    let summary = stats::summarize(&records);

    assert_eq!(summary.top_triggers[0].trigger, "speaking-in-public");
    assert_eq!(summary.top_triggers[0].count, 2);
    assert_eq!(summary.top_triggers[1].trigger, "phone-calls");
    assert_eq!(summary.top_triggers[1].count, 1);
}

#[test]
fn trigger_ties_keep_first_encountered_order() {
    let records = vec![
        record("a", Some(scored(50, ProfileType::LowRisk, &["crowds"]))),
        record("b", Some(scored(50, ProfileType::LowRisk, &["phone-calls"]))),
    ];
    let summary = stats::summarize(&records);

    assert_eq!(summary.top_triggers[0].trigger, "crowds");
    assert_eq!(summary.top_triggers[1].trigger, "phone-calls");
}

#[test]
fn only_the_top_five_triggers_are_reported() {
    let records = vec![
        record(
            "a",
            Some(scored(
                50,
                ProfileType::ModerateRisk,
                &["t1", "t2", "t3", "t4", "t5", "t6", "t7"],
            )),
        ),
        record("b", Some(scored(50, ProfileType::ModerateRisk, &["t3"]))),
    ];
    let summary = stats::summarize(&records);

    assert_eq!(summary.top_triggers.len(), TOP_TRIGGER_LIMIT);
    assert_eq!(summary.top_triggers[0].trigger, "t3");
    assert_eq!(summary.top_triggers[0].count, 2);
}
