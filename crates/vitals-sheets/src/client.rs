use std::sync::Arc;

use futures::future::BoxFuture;
use tracing::{info, warn};

use vitals_core::grid::Grid;
use vitals_core::source::{GridSource, SourceError};

use crate::auth::fetch_access_token;
use crate::config::SheetsConfig;
use crate::error::SheetsError;
use crate::values::{values_url, ValueRange};

/// Read-only client for one configured range.
///
/// Every fetch mints a new access token and reads the range afresh; nothing
/// is cached between calls.
#[derive(Clone)]
pub struct SheetsClient {
    config: Arc<SheetsConfig>,
    agent: ureq::Agent,
}

impl SheetsClient {
    pub fn new(config: SheetsConfig) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(config.timeout))
            .build()
            .into();

        Self {
            config: Arc::new(config),
            agent,
        }
    }

    /// Fetch the configured range. Blocking; see [`SheetsClient::fetch_values`].
    pub fn fetch_values_blocking(&self) -> Result<Grid, SheetsError> {
        let token = fetch_access_token(&self.agent, &self.config.credentials)?;

        let url = values_url(
            &self.config.api_base,
            &self.config.spreadsheet_id,
            &self.config.range,
        );
        let mut response = self
            .agent
            .get(url.as_str())
            .header("Authorization", format!("Bearer {token}"))
            .call()
            .map_err(|e| SheetsError::from_ureq(&url, e))?;

        let body: ValueRange = response
            .body_mut()
            .read_json()
            .map_err(|e| SheetsError::Decode(e.to_string()))?;

        Ok(body.into_grid())
    }

    /// Fetch the configured range on the blocking pool.
    pub async fn fetch_values(&self) -> Result<Grid, SheetsError> {
        let client = self.clone();
        let result = tokio::task::spawn_blocking(move || client.fetch_values_blocking())
            .await
            .map_err(|e| SheetsError::Task(e.to_string()))?;

        match &result {
            Ok(grid) => info!(
                range = %self.config.range,
                rows = grid.rows().len(),
                width = grid.width(),
                "sheet fetched"
            ),
            Err(e) => warn!(range = %self.config.range, error = %e, "sheet fetch failed"),
        }
        result
    }
}

impl GridSource for SheetsClient {
    fn fetch_grid(&self) -> BoxFuture<'_, Result<Grid, SourceError>> {
        Box::pin(async move { self.fetch_values().await.map_err(SourceError::from) })
    }
}
