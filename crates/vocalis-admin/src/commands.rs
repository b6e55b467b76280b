use std::sync::Arc;

use jiff::{Timestamp, Zoned};
use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use vocalis_core::models::community::CommunityMember;
use vocalis_core::models::criteria::FilterCriteria;
use vocalis_core::models::patient::PatientRecord;
use vocalis_export::error::ExportError;
use vocalis_export::render;
use vocalis_export::sink::RenderSink;
use vocalis_search::{filter, stats};
use vocalis_store::store::RecordStore;

use crate::error::AdminError;
use crate::session::{Session, SessionGate};
use crate::state::AdminState;

/// A finished export, ready for the frontend's download machinery.
pub struct ReportExport {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// The command surface the admin frontend calls. One instance per running
/// dashboard; every command except [`login`](AdminService::login) requires a
/// live session token.
pub struct AdminService {
    store: Arc<dyn RecordStore>,
    sink: Arc<dyn RenderSink>,
    gate: SessionGate,
    state: Mutex<AdminState>,
}

impl AdminService {
    pub fn new(
        store: Arc<dyn RecordStore>,
        sink: Arc<dyn RenderSink>,
        gate: SessionGate,
    ) -> Self {
        Self {
            store,
            sink,
            gate,
            state: Mutex::new(AdminState::default()),
        }
    }

    /// Verify the access PIN and issue a session.
    pub async fn login(&self, pin: &str) -> Result<Session, AdminError> {
        self.gate.verify_pin(pin)?;
        let session = self.gate.issue(Timestamp::now());
        let mut state = self.state.lock().await;
        state.sessions.insert(session.token, session.expires_at);
        info!(expires_at = %session.expires_at, "session issued");
        Ok(session)
    }

    /// Revoke a session token. Unknown tokens are ignored.
    pub async fn logout(&self, token: Uuid) {
        self.state.lock().await.sessions.remove(&token);
    }

    async fn authorize(&self, token: Uuid) -> Result<(), AdminError> {
        let mut state = self.state.lock().await;
        match state.sessions.get(&token) {
            None => Err(AdminError::NotAuthenticated),
            Some(expires_at) if *expires_at < Timestamp::now() => {
                state.sessions.remove(&token);
                Err(AdminError::SessionExpired)
            }
            Some(_) => Ok(()),
        }
    }

    /// Fetch both collections from the record store and replace the in-memory
    /// set. On any failure nothing is replaced; the dashboard keeps showing
    /// what it had, flagged with the error.
    pub async fn refresh(&self, token: Uuid) -> Result<(), AdminError> {
        self.authorize(token).await?;

        let patients = self
            .store
            .list_patient_records()
            .await
            .map_err(|e| AdminError::Fetch(e.to_string()))?;
        let community = self
            .store
            .list_community_members()
            .await
            .map_err(|e| AdminError::Fetch(e.to_string()))?;

        let mut state = self.state.lock().await;
        info!(
            patients = patients.len(),
            community = community.len(),
            "record set refreshed"
        );
        state.patients = patients;
        state.community = community;
        Ok(())
    }

    /// The patient table view: criteria applied to the in-memory set.
    pub async fn patients(
        &self,
        token: Uuid,
        criteria: &FilterCriteria,
    ) -> Result<Vec<PatientRecord>, AdminError> {
        self.authorize(token).await?;
        let state = self.state.lock().await;
        Ok(filter::apply(&state.patients, criteria)
            .into_iter()
            .cloned()
            .collect())
    }

    pub async fn community(&self, token: Uuid) -> Result<Vec<CommunityMember>, AdminError> {
        self.authorize(token).await?;
        Ok(self.state.lock().await.community.clone())
    }

    /// Dashboard summary over the full (unfiltered) patient set.
    pub async fn stats(&self, token: Uuid) -> Result<stats::Stats, AdminError> {
        self.authorize(token).await?;
        let state = self.state.lock().await;
        Ok(stats::summarize(&state.patients))
    }

    /// Delete one patient record, permanently.
    ///
    /// One delete per id may be in flight; the record leaves the in-memory
    /// set only after the store confirms, so a failure leaves the dashboard
    /// exactly as it was. No retries here; the operator confirms again.
    pub async fn delete_patient(&self, token: Uuid, id: &str) -> Result<(), AdminError> {
        self.authorize(token).await?;

        {
            let mut state = self.state.lock().await;
            if !state.deletes_in_flight.insert(id.to_string()) {
                return Err(AdminError::DeleteInFlight(id.to_string()));
            }
        }

        let outcome = self.store.delete_patient_record(id).await;

        let mut state = self.state.lock().await;
        state.deletes_in_flight.remove(id);
        match outcome {
            Ok(()) => {
                state.patients.retain(|record| record.id != id);
                info!(id, "patient record deleted");
                Ok(())
            }
            Err(e) => {
                warn!(id, error = %e, "delete failed, record kept");
                Err(AdminError::Delete {
                    id: id.to_string(),
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Render a patient's report and push it through the export sink.
    ///
    /// One export per id may be in flight; different ids run concurrently
    /// since each document is independent. Serializer or sink failure leaves
    /// no partial artifact and no state change.
    pub async fn export_report(&self, token: Uuid, id: &str) -> Result<ReportExport, AdminError> {
        self.authorize(token).await?;

        let record = {
            let mut state = self.state.lock().await;
            let Some(record) = state.patients.iter().find(|r| r.id == id).cloned() else {
                return Err(AdminError::UnknownRecord(id.to_string()));
            };
            if !state.exports_in_flight.insert(id.to_string()) {
                return Err(AdminError::ExportInFlight(id.to_string()));
            }
            record
        };

        let outcome = self.render_and_export(&record);

        self.state.lock().await.exports_in_flight.remove(id);
        outcome.map_err(|e| {
            warn!(id, error = %e, "report export failed");
            AdminError::Export {
                id: id.to_string(),
                reason: e.to_string(),
            }
        })
    }

    fn render_and_export(&self, record: &PatientRecord) -> Result<ReportExport, ExportError> {
        let document = render::render(record, &Zoned::now())?;
        let bytes = self.sink.export(&document)?;
        info!(record_id = %record.id, filename = %document.filename, "report exported");
        Ok(ReportExport {
            filename: document.filename,
            bytes,
        })
    }
}
