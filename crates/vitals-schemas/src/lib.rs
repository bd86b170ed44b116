//! vitals-schemas
//!
//! Mapping-version definitions. Pure data: each version is a static table
//! pairing canonical metric keys with field descriptors, plus the summary
//! template its lineage renders with. Adding a historical or future sheet
//! shape means adding one table here, not new control flow.

pub mod error;
pub mod field;
pub mod infer;
pub mod schemas;

use std::collections::HashSet;

use vitals_core::descriptor::{Addressing, ColumnAddress};
use vitals_core::error::CoreError;
use vitals_core::extract::extract_spec;
use vitals_core::grid::RowRef;
use vitals_core::models::metrics::CanonicalMetrics;

use field::MetricField;

pub use infer::infer_schema;

/// Trait implemented by each mapping-version.
pub trait SchemaVersion: Send + Sync {
    /// Unique identifier for this version (e.g., "no_cgm_wide").
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Whether columns are addressed by header name or by position.
    fn addressing(&self) -> Addressing;

    /// The column holding member identifiers.
    fn identifier(&self) -> &ColumnAddress;

    /// The canonical metric table.
    fn fields(&self) -> &[MetricField];

    /// Summary template rendered for this lineage, if it has one.
    fn summary_template(&self) -> Option<&str> {
        None
    }

    /// Canonical keys this version always produces.
    fn produced_keys(&self) -> Vec<&str> {
        self.fields().iter().map(|f| f.key.as_str()).collect()
    }

    /// Populate the full canonical map from one row.
    ///
    /// Fields are independent, so evaluation order has no effect on the
    /// result. Fails only when a descriptor without a default addresses a
    /// column the grid lacks.
    fn map_row(&self, row: &RowRef<'_, '_>) -> Result<CanonicalMetrics, CoreError> {
        let mut metrics = CanonicalMetrics::new();
        for field in self.fields() {
            let value = extract_spec(row, &field.spec)?;
            metrics.insert(field.key.as_str(), value);
        }
        Ok(metrics)
    }

    /// Static problems with the table itself: addressing that disagrees with
    /// the version's mode, and repeated canonical keys.
    fn check_consistency(&self) -> Vec<String> {
        let mut problems = Vec::new();
        let addressing = self.addressing();

        if self.identifier().addressing() != addressing {
            problems.push(format!(
                "{}: identifier column {} does not use {:?} addressing",
                self.id(),
                self.identifier(),
                addressing,
            ));
        }

        let mut seen = HashSet::new();
        for field in self.fields() {
            if !seen.insert(field.key.as_str()) {
                problems.push(format!("{}: duplicate key '{}'", self.id(), field.key));
            }
            for descriptor in field.spec.descriptors() {
                if descriptor.address.addressing() != addressing {
                    problems.push(format!(
                        "{}: field '{}' addresses {} outside {:?} addressing",
                        self.id(),
                        field.key,
                        descriptor.address,
                        addressing,
                    ));
                }
            }
        }
        problems
    }
}

/// Return all registered mapping-versions, in inference preference order.
pub fn all_schemas() -> Vec<Box<dyn SchemaVersion>> {
    vec![
        Box::new(schemas::no_cgm::NoCgmWide),
        Box::new(schemas::no_cgm::NoCgmLegacy),
        Box::new(schemas::cgm_named::CgmNamed),
        Box::new(schemas::engagement_named::EngagementNamed),
    ]
}

/// Look up a mapping-version by ID.
pub fn get_schema(id: &str) -> Option<Box<dyn SchemaVersion>> {
    all_schemas().into_iter().find(|s| s.id() == id)
}
