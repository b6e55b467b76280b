use jiff::civil;
use jiff::tz::TimeZone;

use vocalis_core::models::criteria::{FilterCriteria, ScoreRange};
use vocalis_core::models::patient::PatientRecord;
use vocalis_core::models::profile::ProfileType;
use vocalis_core::models::result::ResultData;
use vocalis_search::filter;

fn timestamp(datetime: civil::DateTime) -> jiff::Timestamp {
    // Build from the system zone so the filter's calendar-day conversion
    // round-trips regardless of where the tests run.
    datetime.to_zoned(TimeZone::system()).unwrap().timestamp()
}

fn scored(risk: u8, emotion: u8, function: u8, tier: ProfileType) -> ResultData {
    ResultData {
        risk_score: risk,
        emotion_score: emotion,
        function_score: function,
        profile_type: tier,
        profile_label: tier.as_str().to_string(),
        triggers: Vec::new(),
        exercises: Vec::new(),
    }
}

fn record(
    id: &str,
    name: &str,
    email: &str,
    phone: Option<&str>,
    created: civil::DateTime,
    result: Option<ResultData>,
) -> PatientRecord {
    PatientRecord {
        id: id.to_string(),
        name: Some(name.to_string()),
        email: Some(email.to_string()),
        phone: phone.map(str::to_string),
        created_at: timestamp(created),
        updated_at: timestamp(created),
        answers: Vec::new(),
        result,
    }
}

fn sample_set() -> Vec<PatientRecord> {
    vec![
        record(
            "a",
            "Maya Lindqvist",
            "maya@example.com",
            Some("+46701234567"),
            civil::date(2025, 3, 10).at(9, 0, 0, 0),
            Some(scored(45, 60, 30, ProfileType::ModerateRisk)),
        ),
        record(
            "b",
            "Jonas Berg",
            "jonas@example.com",
            None,
            civil::date(2025, 3, 8).at(14, 30, 0, 0),
            Some(scored(82, 75, 68, ProfileType::HighRisk)),
        ),
        record(
            "c",
            "Priya Nair",
            "priya@example.com",
            Some("+918812345678"),
            civil::date(2025, 2, 20).at(18, 15, 0, 0),
            None,
        ),
    ]
}

#[test]
fn default_criteria_returns_every_record_in_order() {
    let records = sample_set();
    let result = filter::apply(&records, &FilterCriteria::default());

    assert_eq!(result.len(), records.len());
    for (kept, original) in result.iter().zip(records.iter()) {
        assert!(std::ptr::eq(*kept, original));
    }
}

#[test]
fn empty_input_yields_empty_output() {
    let records: Vec<PatientRecord> = Vec::new();
    assert!(filter::apply(&records, &FilterCriteria::default()).is_empty());
}

#[test]
fn filtering_twice_with_the_same_criteria_is_a_noop() {
    let records = sample_set();
    let mut criteria = FilterCriteria::default();
    criteria.risk_score = ScoreRange::new(40, 100);

    let once: Vec<PatientRecord> = filter::apply(&records, &criteria)
        .into_iter()
        .cloned()
        .collect();
    let twice = filter::apply(&once, &criteria);

    assert_eq!(twice.len(), once.len());
    for (again, first) in twice.iter().zip(once.iter()) {
        assert_eq!(again.id, first.id);
    }
}

#[test]
fn search_matches_name_case_insensitively() {
    let records = sample_set();
    let mut criteria = FilterCriteria::default();
    criteria.search = "MAYA".to_string();

    let result = filter::apply(&records, &criteria);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "a");
}

#[test]
fn search_matches_email_and_phone() {
    let records = sample_set();

    let mut criteria = FilterCriteria::default();
    criteria.search = "jonas@".to_string();
    assert_eq!(filter::apply(&records, &criteria)[0].id, "b");

    criteria.search = "8812".to_string();
    assert_eq!(filter::apply(&records, &criteria)[0].id, "c");
}

#[test]
fn search_rejects_when_no_field_matches() {
    let records = sample_set();
    let mut criteria = FilterCriteria::default();
    criteria.search = "nobody".to_string();
    assert!(filter::apply(&records, &criteria).is_empty());
}

#[test]
fn profile_filter_excludes_pending_records() {
    let records = sample_set();
    let mut criteria = FilterCriteria::default();
    criteria.profile_types = vec![ProfileType::ModerateRisk, ProfileType::HighRisk];

    let result = filter::apply(&records, &criteria);
    let ids: Vec<&str> = result.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);
}

#[test]
fn risk_bound_is_inclusive() {
    // Record "a" carries risk 45, emotion 60, function 30.
    let records = sample_set();
    let mut criteria = FilterCriteria::default();

    criteria.risk_score = ScoreRange::new(50, 100);
    assert!(!filter::apply(&records, &criteria).iter().any(|r| r.id == "a"));

    criteria.risk_score = ScoreRange::new(40, 100);
    assert!(filter::apply(&records, &criteria).iter().any(|r| r.id == "a"));
}

#[test]
fn pending_record_reads_as_zero_for_score_bounds() {
    // Non-obvious but deliberate: a record still awaiting scoring passes a
    // low-score filter because its scores read as 0.
    let records = sample_set();
    let mut criteria = FilterCriteria::default();
    criteria.risk_score = ScoreRange::new(0, 10);

    let result = filter::apply(&records, &criteria);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "c");
}

#[test]
fn date_to_covers_the_entire_day() {
    let late = record(
        "late",
        "Late Entry",
        "late@example.com",
        None,
        civil::date(2025, 3, 10).at(23, 50, 0, 0),
        None,
    );
    let next_day = record(
        "next",
        "Next Day",
        "next@example.com",
        None,
        civil::date(2025, 3, 11).at(0, 1, 0, 0),
        None,
    );
    let records = vec![late, next_day];

    let mut criteria = FilterCriteria::default();
    criteria.date_to = Some(civil::date(2025, 3, 10));

    let result = filter::apply(&records, &criteria);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "late");
}

#[test]
fn date_from_starts_at_the_day_boundary() {
    let records = sample_set();
    let mut criteria = FilterCriteria::default();
    criteria.date_from = Some(civil::date(2025, 3, 8));

    let ids: Vec<&str> = filter::apply(&records, &criteria)
        .iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(ids, ["a", "b"]);
}

#[test]
fn predicates_compose_with_and() {
    let records = sample_set();
    let mut criteria = FilterCriteria::default();
    criteria.search = "example.com".to_string();
    criteria.profile_types = vec![ProfileType::HighRisk];
    criteria.risk_score = ScoreRange::new(80, 100);

    let result = filter::apply(&records, &criteria);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "b");
}
