use jiff::Timestamp;
use jsonwebtoken::{encode, Algorithm, Header};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ServiceAccountKey;
use crate::error::SheetsError;

pub const READONLY_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets.readonly";

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Assertions are valid for the maximum Google accepts.
const ASSERTION_LIFETIME_SECS: i64 = 3600;

#[derive(Debug, Serialize, Deserialize)]
pub struct AssertionClaims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Build the claims of a service-account assertion issued at `now`.
pub fn assertion_claims(key: &ServiceAccountKey, now: Timestamp) -> AssertionClaims {
    let iat = now.as_second();
    AssertionClaims {
        iss: key.client_email.clone(),
        scope: READONLY_SCOPE.to_string(),
        aud: key.token_uri.clone(),
        iat,
        exp: iat + ASSERTION_LIFETIME_SECS,
    }
}

/// Sign a service-account assertion with the key's RSA private key.
pub fn signed_assertion(key: &ServiceAccountKey, now: Timestamp) -> Result<String, SheetsError> {
    let mut header = Header::new(Algorithm::RS256);
    header.kid = key.private_key_id.clone();

    let token = encode(&header, &assertion_claims(key, now), key.signing_key())?;
    Ok(token)
}

/// Exchange a fresh assertion for a bearer token. Blocking.
pub fn fetch_access_token(
    agent: &ureq::Agent,
    key: &ServiceAccountKey,
) -> Result<String, SheetsError> {
    let assertion = signed_assertion(key, Timestamp::now())?;

    debug!(client_email = %key.client_email, "requesting access token");
    let mut response = agent
        .post(key.token_uri.as_str())
        .send_form([
            ("grant_type", JWT_BEARER_GRANT),
            ("assertion", assertion.as_str()),
        ])
        .map_err(|e| SheetsError::from_ureq(&key.token_uri, e))?;

    let token: TokenResponse = response
        .body_mut()
        .read_json()
        .map_err(|e| SheetsError::Decode(e.to_string()))?;

    Ok(token.access_token)
}
