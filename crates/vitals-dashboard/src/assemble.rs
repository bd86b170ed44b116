use tracing::{debug, info};

use vitals_core::grid::Grid;
use vitals_core::locate::locate;
use vitals_core::models::dashboard::DashboardResult;
use vitals_core::source::GridSource;
use vitals_schemas::SchemaVersion;
use vitals_summary::render::render;

use crate::error::DashboardError;
use crate::SchemaSelection;

/// Fetch a fresh grid and build the dashboard for `identifier`.
///
/// Stages: fetching, locating, extracting, rendering. A missing member is a
/// normal [`DashboardResult::NotFound`]; only fetch failures and
/// configuration defects are errors. No retries here.
pub async fn build_dashboard(
    source: &dyn GridSource,
    selection: &SchemaSelection,
    identifier: &str,
) -> Result<DashboardResult, DashboardError> {
    debug!(identifier, "fetching grid");
    let grid = source.fetch_grid().await?;

    if grid.is_empty() {
        info!(identifier, "grid is empty");
        return Ok(DashboardResult::not_found(identifier));
    }

    let schema = selection.resolve(&grid)?;
    dashboard_from_grid(&grid, schema.as_ref(), identifier)
}

/// Build the dashboard for `identifier` against an already fetched grid.
pub fn dashboard_from_grid(
    grid: &Grid,
    schema: &dyn SchemaVersion,
    identifier: &str,
) -> Result<DashboardResult, DashboardError> {
    let view = grid.view(schema.addressing());

    debug!(identifier, schema = schema.id(), "locating member");
    let Some(row) = locate(&view, schema.identifier(), identifier)? else {
        info!(identifier, schema = schema.id(), "member not found");
        return Ok(DashboardResult::not_found(identifier));
    };

    debug!(identifier, row = row.index(), "extracting metrics");
    let metrics = schema.map_row(&row)?;

    let summary = match schema.summary_template() {
        Some(template_id) => {
            debug!(identifier, template = template_id, "rendering summary");
            Some(render(&metrics, template_id)?)
        }
        None => None,
    };

    info!(
        identifier,
        schema = schema.id(),
        metrics = metrics.len(),
        "dashboard built"
    );

    Ok(DashboardResult::Found { metrics, summary })
}
