use std::future::Future;
use std::pin::Pin;

use vocalis_core::models::community::CommunityMember;
use vocalis_core::models::patient::PatientRecord;

use crate::collections;
use crate::error::StoreError;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The record store as the command layer sees it.
///
/// Methods return boxed futures for dyn compatibility, so the admin service
/// can hold an `Arc<dyn RecordStore>` and tests can substitute an in-memory
/// double.
pub trait RecordStore: Send + Sync {
    /// All patient records, newest first.
    fn list_patient_records(&self) -> BoxFuture<'_, Result<Vec<PatientRecord>, StoreError>>;

    /// All community members, newest first.
    fn list_community_members(&self) -> BoxFuture<'_, Result<Vec<CommunityMember>, StoreError>>;

    /// Delete one patient record. Idempotent.
    fn delete_patient_record<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<(), StoreError>>;
}

/// Production impl backed by the S3 document bucket.
pub struct S3RecordStore {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3RecordStore {
    pub fn new(client: aws_sdk_s3::Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

impl RecordStore for S3RecordStore {
    fn list_patient_records(&self) -> BoxFuture<'_, Result<Vec<PatientRecord>, StoreError>> {
        Box::pin(collections::list_patient_records(&self.client, &self.bucket))
    }

    fn list_community_members(&self) -> BoxFuture<'_, Result<Vec<CommunityMember>, StoreError>> {
        Box::pin(collections::list_community_members(&self.client, &self.bucket))
    }

    fn delete_patient_record<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<(), StoreError>> {
        Box::pin(collections::delete_patient_record(
            &self.client,
            &self.bucket,
            id,
        ))
    }
}
