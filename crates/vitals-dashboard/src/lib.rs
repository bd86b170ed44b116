//! vitals-dashboard
//!
//! Request orchestration: one grid fetch, then locate → extract → render.
//! Every call works on its own snapshot; nothing is shared between calls.

pub mod assemble;
pub mod error;
pub mod members;

pub use assemble::{build_dashboard, dashboard_from_grid};
pub use members::{list_members, members_from_grid};

use vitals_core::grid::Grid;
use vitals_schemas::error::SchemaError;
use vitals_schemas::{all_schemas, get_schema, infer_schema, SchemaVersion};
use vitals_summary::render::missing_keys;

/// Which mapping-version applies to a fetched grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaSelection {
    /// A specific version by ID.
    Fixed(String),
    /// Chosen from the grid's shape and header set.
    Inferred,
}

impl SchemaSelection {
    /// `"auto"` (or empty) selects inference; anything else names a version.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "" | "auto" => SchemaSelection::Inferred,
            id => SchemaSelection::Fixed(id.to_string()),
        }
    }

    pub fn resolve(&self, grid: &Grid) -> Result<Box<dyn SchemaVersion>, SchemaError> {
        match self {
            SchemaSelection::Fixed(id) => {
                get_schema(id).ok_or_else(|| SchemaError::UnknownSchema(id.clone()))
            }
            SchemaSelection::Inferred => infer_schema(grid).ok_or(SchemaError::NoMatchingSchema),
        }
    }
}

/// Cross-check every registered version: its own table, and that its
/// summary template only needs keys the table produces. An empty result
/// means the registry is safe to serve.
pub fn verify_registry() -> Vec<String> {
    let mut problems = Vec::new();
    for schema in all_schemas() {
        problems.extend(schema.check_consistency());

        let Some(template_id) = schema.summary_template() else {
            continue;
        };
        match missing_keys(template_id, &schema.produced_keys()) {
            Ok(missing) => problems.extend(missing.into_iter().map(|key| {
                format!(
                    "{}: template '{template_id}' needs '{key}' which the table does not produce",
                    schema.id()
                )
            })),
            Err(e) => problems.push(format!("{}: {e}", schema.id())),
        }
    }
    problems
}
