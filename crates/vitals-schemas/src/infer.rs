use tracing::debug;

use vitals_core::descriptor::Addressing;
use vitals_core::grid::Grid;

use crate::{all_schemas, SchemaVersion};

/// How well a version fits a grid: `None` when it can't apply at all.
///
/// A version applies when its identifier column exists and every column it
/// declares without a default exists. Named versions that match the header
/// row outrank positional ones; after that, more columns covered wins.
fn fit(schema: &dyn SchemaVersion, grid: &Grid) -> Option<(bool, usize)> {
    let view = grid.view(schema.addressing());
    view.column_position(schema.identifier())?;

    let mut covered = 0;
    for field in schema.fields() {
        for descriptor in field.spec.descriptors() {
            if view.column_position(&descriptor.address).is_some() {
                covered += 1;
            } else if !descriptor.is_optional() {
                return None;
            }
        }
    }

    Some((schema.addressing() == Addressing::Named, covered))
}

/// Pick the registered version that best fits the grid's shape and header
/// set. Registry order breaks ties.
pub fn infer_schema(grid: &Grid) -> Option<Box<dyn SchemaVersion>> {
    let mut best: Option<((bool, usize), Box<dyn SchemaVersion>)> = None;

    for schema in all_schemas() {
        let Some(score) = fit(schema.as_ref(), grid) else {
            continue;
        };
        debug!(schema = schema.id(), named = score.0, covered = score.1, "schema candidate");
        if best.as_ref().is_none_or(|(top, _)| score > *top) {
            best = Some((score, schema));
        }
    }

    best.map(|(_, schema)| schema)
}
