use serde::{Deserialize, Serialize};

use super::metrics::CanonicalMetrics;

/// Payload of a dashboard lookup.
///
/// A missing member is an ordinary outcome, not an error: it serializes as
/// `{"error": "<id> not found"}` with no `summary` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DashboardResult {
    Found {
        metrics: CanonicalMetrics,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        summary: Option<String>,
    },
    NotFound {
        error: String,
    },
}

impl DashboardResult {
    pub fn not_found(identifier: &str) -> Self {
        DashboardResult::NotFound {
            error: format!("{identifier} not found"),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, DashboardResult::Found { .. })
    }
}
