use std::collections::{HashMap, HashSet};

use jiff::Timestamp;
use uuid::Uuid;

use vocalis_core::models::community::CommunityMember;
use vocalis_core::models::patient::PatientRecord;

/// Everything the dashboard session holds in memory. Lives behind the
/// service mutex; records are replaced wholesale on refresh and only ever
/// mutated by whole-record deletion.
#[derive(Default)]
pub struct AdminState {
    pub patients: Vec<PatientRecord>,
    pub community: Vec<CommunityMember>,

    /// Live session tokens and their expiries.
    pub sessions: HashMap<Uuid, Timestamp>,

    /// Record ids with a delete currently in flight. One per id; the
    /// confirm control stays disabled until the outcome lands.
    pub deletes_in_flight: HashSet<String>,

    /// Record ids with a report export currently in flight. One per id;
    /// distinct records may export concurrently.
    pub exports_in_flight: HashSet<String>,
}
