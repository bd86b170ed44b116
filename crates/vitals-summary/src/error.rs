use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("unknown summary template: {0}")]
    UnknownTemplate(String),

    /// The mapping did not produce a key the template needs.
    #[error("template '{template_id}' requires metric '{key}' which the mapping did not produce")]
    MissingMetric { template_id: String, key: String },

    #[error("template parse error: {0}")]
    TemplateParse(String),

    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<tera::Error> for SummaryError {
    fn from(e: tera::Error) -> Self {
        SummaryError::TemplateRender(e.to_string())
    }
}
