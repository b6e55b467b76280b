use jiff::tz::TimeZone;

use vocalis_core::models::criteria::FilterCriteria;
use vocalis_core::models::patient::PatientRecord;

/// Apply `criteria` to `records`, preserving input order.
///
/// Every predicate group must hold for a record to pass. Default criteria
/// pass every record, so the result is the full input. Records missing a
/// `result` read all three scores as 0 here, so pending records
/// surface under low-score bounds and vanish from narrow high-score ranges.
pub fn apply<'a>(records: &'a [PatientRecord], criteria: &FilterCriteria) -> Vec<&'a PatientRecord> {
    let tz = TimeZone::system();
    let matched: Vec<&PatientRecord> = records
        .iter()
        .filter(|record| matches(record, criteria, &tz))
        .collect();

    tracing::debug!(
        total = records.len(),
        matched = matched.len(),
        active = criteria.active_filters().len(),
        "filter applied"
    );
    matched
}

fn matches(record: &PatientRecord, criteria: &FilterCriteria, tz: &TimeZone) -> bool {
    if !criteria.search.is_empty() && !matches_search(record, &criteria.search) {
        return false;
    }

    if !criteria.profile_types.is_empty() {
        // A pending record has no tier and can never satisfy a tier selection.
        match record.profile_type() {
            Some(tier) if criteria.profile_types.contains(&tier) => {}
            _ => return false,
        }
    }

    if !criteria.risk_score.contains(record.risk_score())
        || !criteria.emotion_score.contains(record.emotion_score())
        || !criteria.function_score.contains(record.function_score())
    {
        return false;
    }

    if criteria.date_from.is_some() || criteria.date_to.is_some() {
        let day = record.created_at.to_zoned(tz.clone()).date();
        if let Some(from) = criteria.date_from
            && day < from
        {
            return false;
        }
        // The upper bound covers the whole calendar day, not just its start.
        if let Some(to) = criteria.date_to
            && day > to
        {
            return false;
        }
    }

    true
}

/// Case-insensitive substring match on name or email; phone numbers are
/// matched verbatim. A missing field simply never matches.
fn matches_search(record: &PatientRecord, search: &str) -> bool {
    let needle = search.to_lowercase();
    let name_hit = record
        .name
        .as_deref()
        .is_some_and(|name| name.to_lowercase().contains(&needle));
    let email_hit = record
        .email
        .as_deref()
        .is_some_and(|email| email.to_lowercase().contains(&needle));
    let phone_hit = record
        .phone
        .as_deref()
        .is_some_and(|phone| phone.contains(search));

    name_hit || email_hit || phone_hit
}
