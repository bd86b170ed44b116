use tracing::{debug, info};

use vitals_core::grid::Grid;
use vitals_core::locate::identifiers;
use vitals_core::source::GridSource;
use vitals_schemas::SchemaVersion;

use crate::error::DashboardError;
use crate::SchemaSelection;

/// Fetch a fresh grid and list every member identifier in row order.
pub async fn list_members(
    source: &dyn GridSource,
    selection: &SchemaSelection,
) -> Result<Vec<String>, DashboardError> {
    debug!("fetching grid");
    let grid = source.fetch_grid().await?;

    if grid.is_empty() {
        return Ok(Vec::new());
    }

    let schema = selection.resolve(&grid)?;
    members_from_grid(&grid, schema.as_ref())
}

/// Identifier column of every data row. Duplicates are kept; the locator's
/// first-match rule is what deals with them.
pub fn members_from_grid(
    grid: &Grid,
    schema: &dyn SchemaVersion,
) -> Result<Vec<String>, DashboardError> {
    let view = grid.view(schema.addressing());
    let members = identifiers(&view, schema.identifier())?;
    info!(schema = schema.id(), count = members.len(), "members listed");
    Ok(members)
}
