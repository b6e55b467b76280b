use thiserror::Error;

/// Command-layer failures. Each is local and recoverable by retrying the
/// user action; nothing here is fatal to the dashboard.
#[derive(Debug, Error)]
pub enum AdminError {
    #[error("invalid access code")]
    AuthFailed,

    #[error("not authenticated")]
    NotAuthenticated,

    #[error("session expired")]
    SessionExpired,

    #[error("failed to fetch records: {0}")]
    Fetch(String),

    #[error("failed to delete record {id}: {reason}")]
    Delete { id: String, reason: String },

    #[error("a delete for record {0} is already in flight")]
    DeleteInFlight(String),

    #[error("failed to export report for record {id}: {reason}")]
    Export { id: String, reason: String },

    #[error("an export for record {0} is already in flight")]
    ExportInFlight(String),

    #[error("unknown record: {0}")]
    UnknownRecord(String),
}
