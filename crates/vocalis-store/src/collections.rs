use aws_sdk_s3::Client;
use tracing::warn;

use vocalis_core::catalog;
use vocalis_core::models::community::CommunityMember;
use vocalis_core::models::patient::PatientRecord;
use vocalis_core::store_keys;

use crate::error::StoreError;
use crate::objects;

/// Fetch the patient collection, newest submission first.
///
/// The read is tolerant: a document that fails to decode is skipped with a
/// warning, and a key that vanishes between list and get (concurrent delete)
/// is ignored. Anything else aborts the fetch.
pub async fn list_patient_records(
    client: &Client,
    bucket: &str,
) -> Result<Vec<PatientRecord>, StoreError> {
    let keys = objects::list_objects(client, bucket, store_keys::PATIENTS_PREFIX).await?;

    let mut records = Vec::with_capacity(keys.len());
    for key in keys {
        let Some(body) = fetch_body(client, bucket, &key).await? else {
            continue;
        };
        match decode_patient(&key, &body) {
            Ok(record) => records.push(record),
            Err(e) => warn!(key = %key, error = %e, "skipping undecodable patient document"),
        }
    }

    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(records)
}

/// Fetch the community collection, newest signup first. Same tolerant-read
/// behavior as [`list_patient_records`].
pub async fn list_community_members(
    client: &Client,
    bucket: &str,
) -> Result<Vec<CommunityMember>, StoreError> {
    let keys = objects::list_objects(client, bucket, store_keys::COMMUNITY_PREFIX).await?;

    let mut members = Vec::with_capacity(keys.len());
    for key in keys {
        let Some(body) = fetch_body(client, bucket, &key).await? else {
            continue;
        };
        match decode_member(&key, &body) {
            Ok(member) => members.push(member),
            Err(e) => warn!(key = %key, error = %e, "skipping undecodable community document"),
        }
    }

    members.sort_by(|a, b| b.joined_at.cmp(&a.joined_at));
    Ok(members)
}

/// Delete one patient document. Idempotent: deleting an id that is already
/// gone succeeds.
pub async fn delete_patient_record(
    client: &Client,
    bucket: &str,
    id: &str,
) -> Result<(), StoreError> {
    objects::delete_object(client, bucket, &store_keys::patient(id)).await
}

async fn fetch_body(
    client: &Client,
    bucket: &str,
    key: &str,
) -> Result<Option<Vec<u8>>, StoreError> {
    match objects::get_object(client, bucket, key).await {
        Ok(body) => Ok(Some(body)),
        Err(StoreError::NotFound { key }) => {
            warn!(key = %key, "document deleted between list and get");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Decode a patient document. Answers whose value type disagrees with the
/// question catalog are reported but do not reject the record.
pub fn decode_patient(key: &str, body: &[u8]) -> Result<PatientRecord, StoreError> {
    let record: PatientRecord = serde_json::from_slice(body).map_err(|source| StoreError::Decode {
        key: key.to_string(),
        source,
    })?;

    for answer in &record.answers {
        if let Err(e) = catalog::check(answer) {
            warn!(key = %key, error = %e, "answer disagrees with question catalog");
        }
    }

    Ok(record)
}

pub fn decode_member(key: &str, body: &[u8]) -> Result<CommunityMember, StoreError> {
    serde_json::from_slice(body).map_err(|source| StoreError::Decode {
        key: key.to_string(),
        source,
    })
}
