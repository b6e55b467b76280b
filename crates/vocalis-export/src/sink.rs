use crate::error::ExportError;
use crate::render::ReportDocument;

/// The external rendering/export facility.
///
/// Implementations convert a finished [`ReportDocument`] into downloadable
/// bytes (PDF in production). The serializer never calls this itself; the
/// command layer injects a sink and hands documents over, so a sink failure
/// can never corrupt in-memory state or leave a partial artifact.
pub trait RenderSink: Send + Sync {
    fn export(&self, document: &ReportDocument) -> Result<Vec<u8>, ExportError>;
}
