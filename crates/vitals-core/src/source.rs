use futures::future::BoxFuture;
use thiserror::Error;

use crate::grid::Grid;

#[derive(Debug, Clone, Error)]
pub enum SourceError {
    /// Credentials or other required settings are absent. Not retryable.
    #[error("configuration missing: {0}")]
    ConfigurationMissing(String),

    /// Transport, auth or decoding failure while reaching the data source.
    #[error("fetch failed: {0}")]
    Fetch(String),
}

/// Anything that can hand over a fresh grid snapshot.
///
/// Each call is one fetch; implementations must not cache between calls.
pub trait GridSource: Send + Sync {
    fn fetch_grid(&self) -> BoxFuture<'_, Result<Grid, SourceError>>;
}

/// A fixed grid is its own source.
impl GridSource for Grid {
    fn fetch_grid(&self) -> BoxFuture<'_, Result<Grid, SourceError>> {
        let grid = self.clone();
        Box::pin(async move { Ok(grid) })
    }
}
