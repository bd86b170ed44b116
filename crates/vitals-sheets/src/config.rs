use std::fmt;
use std::time::Duration;

use jsonwebtoken::EncodingKey;
use serde::Deserialize;

use crate::error::SheetsError;

pub const CREDENTIALS_VAR: &str = "GOOGLE_CREDENTIALS_JSON";
pub const SPREADSHEET_VAR: &str = "VITALS_SPREADSHEET_ID";
pub const RANGE_VAR: &str = "VITALS_SHEET_RANGE";
pub const TIMEOUT_VAR: &str = "VITALS_FETCH_TIMEOUT_SECS";

const DEFAULT_RANGE: &str = "A:BZ";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_API_BASE: &str = "https://sheets.googleapis.com";
const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

#[derive(Deserialize)]
struct KeyFile {
    client_email: String,
    private_key: String,
    #[serde(default)]
    private_key_id: Option<String>,
    #[serde(default)]
    project_id: Option<String>,
    #[serde(default = "default_token_uri")]
    token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

/// Service-account key, as downloaded from the Google console, with its RSA
/// private key already parsed for signing.
#[derive(Clone)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key_id: Option<String>,
    pub project_id: Option<String>,
    pub token_uri: String,
    signing_key: EncodingKey,
}

impl ServiceAccountKey {
    /// Parse the key file. A malformed file or an unusable PEM is rejected
    /// here rather than on the first fetch.
    pub fn from_json(json: &str) -> Result<Self, SheetsError> {
        let file: KeyFile =
            serde_json::from_str(json).map_err(|e| SheetsError::InvalidCredentials(e.to_string()))?;
        let signing_key = EncodingKey::from_rsa_pem(file.private_key.as_bytes())
            .map_err(|e| SheetsError::InvalidCredentials(format!("private_key: {e}")))?;

        Ok(Self {
            client_email: file.client_email,
            private_key_id: file.private_key_id,
            project_id: file.project_id,
            token_uri: file.token_uri,
            signing_key,
        })
    }

    pub(crate) fn signing_key(&self) -> &EncodingKey {
        &self.signing_key
    }
}

// Never print key material.
impl fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("client_email", &self.client_email)
            .field("private_key", &"<redacted>")
            .field("private_key_id", &self.private_key_id)
            .field("project_id", &self.project_id)
            .field("token_uri", &self.token_uri)
            .finish()
    }
}

/// Everything the fetch needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct SheetsConfig {
    pub spreadsheet_id: String,
    /// A1-notation range, optionally tab-qualified (`'Tab name'!A:BZ`).
    pub range: String,
    pub credentials: ServiceAccountKey,
    pub timeout: Duration,
    pub api_base: String,
}

impl SheetsConfig {
    pub fn from_env() -> Result<Self, SheetsError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable lookup. Missing or unparseable credentials and
    /// a missing spreadsheet ID are fatal.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SheetsError> {
        let credentials_json = lookup(CREDENTIALS_VAR)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                SheetsError::ConfigurationMissing(format!("{CREDENTIALS_VAR} is not set"))
            })?;
        let credentials = ServiceAccountKey::from_json(&credentials_json)?;

        let spreadsheet_id = lookup(SPREADSHEET_VAR)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                SheetsError::ConfigurationMissing(format!("{SPREADSHEET_VAR} is not set"))
            })?;

        let range = lookup(RANGE_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_RANGE.to_string());

        let timeout_secs = match lookup(TIMEOUT_VAR) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| SheetsError::InvalidSetting {
                name: TIMEOUT_VAR.to_string(),
                message: e.to_string(),
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            spreadsheet_id,
            range,
            credentials,
            timeout: Duration::from_secs(timeout_secs),
            api_base: DEFAULT_API_BASE.to_string(),
        })
    }
}
