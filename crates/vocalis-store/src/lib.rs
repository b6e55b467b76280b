//! vocalis-store
//!
//! The hosted document database, as the admin client sees it: two read-only
//! collections of JSON documents in S3 plus delete-by-id on the patient
//! collection. The [`store::RecordStore`] trait is the seam the command
//! layer depends on; [`store::S3RecordStore`] is the production impl.

pub mod client;
pub mod collections;
pub mod error;
pub mod objects;
pub mod store;
