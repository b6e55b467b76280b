//! Document-store key conventions.
//!
//! Pure string functions — no AWS SDK dependency. These define the canonical
//! layout of documents in the Vocalis bucket. The questionnaire backend writes
//! under the same conventions; the admin client only reads and deletes.

pub const PATIENTS_PREFIX: &str = "patients/";

pub const COMMUNITY_PREFIX: &str = "community/";

pub fn patient(id: &str) -> String {
    format!("patients/{id}.json")
}

pub fn community_member(id: &str) -> String {
    format!("community/{id}.json")
}

/// Extract the document id from a full key, if the key follows the
/// `<prefix><id>.json` convention.
pub fn id_from_key<'a>(key: &'a str, prefix: &str) -> Option<&'a str> {
    key.strip_prefix(prefix)?.strip_suffix(".json")
}
