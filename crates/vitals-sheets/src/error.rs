use thiserror::Error;

use vitals_core::source::SourceError;

#[derive(Debug, Error)]
pub enum SheetsError {
    #[error("configuration missing: {0}")]
    ConfigurationMissing(String),

    #[error("invalid service account credentials: {0}")]
    InvalidCredentials(String),

    #[error("invalid setting {name}: {message}")]
    InvalidSetting { name: String, message: String },

    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("HTTP {status} from {endpoint}")]
    Status { status: u16, endpoint: String },

    #[error("HTTP request to {endpoint} failed: {message}")]
    Http { endpoint: String, message: String },

    #[error("response decoding failed: {0}")]
    Decode(String),

    #[error("fetch task failed: {0}")]
    Task(String),
}

impl SheetsError {
    pub(crate) fn from_ureq(endpoint: &str, e: ureq::Error) -> Self {
        match e {
            ureq::Error::StatusCode(status) => SheetsError::Status {
                status,
                endpoint: endpoint.to_string(),
            },
            other => SheetsError::Http {
                endpoint: endpoint.to_string(),
                message: other.to_string(),
            },
        }
    }
}

impl From<SheetsError> for SourceError {
    fn from(e: SheetsError) -> Self {
        match e {
            SheetsError::ConfigurationMissing(msg) => SourceError::ConfigurationMissing(msg),
            invalid @ (SheetsError::InvalidCredentials(_) | SheetsError::InvalidSetting { .. }) => {
                SourceError::ConfigurationMissing(invalid.to_string())
            }
            other => SourceError::Fetch(other.to_string()),
        }
    }
}
