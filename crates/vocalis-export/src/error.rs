use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("template parse error: {0}")]
    TemplateParse(String),

    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    #[error("export sink failed: {0}")]
    Sink(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<tera::Error> for ExportError {
    fn from(e: tera::Error) -> Self {
        ExportError::TemplateRender(e.to_string())
    }
}
