use thiserror::Error;

use vitals_core::error::CoreError;
use vitals_core::source::SourceError;
use vitals_schemas::error::SchemaError;
use vitals_summary::error::SummaryError;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Mapping table disagrees with the live sheet.
    #[error("mapping error: {0}")]
    Mapping(#[from] CoreError),

    /// Template and mapping disagree.
    #[error("summary error: {0}")]
    Summary(#[from] SummaryError),
}
