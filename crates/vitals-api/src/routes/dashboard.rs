use axum::extract::{Path, Query, State};
use axum::Json;

use vitals_core::models::dashboard::DashboardResult;

use crate::error::ApiError;
use crate::routes::SchemaQuery;
use crate::state::AppState;

/// Metrics and summary for one member. An unknown member is a normal
/// `200 {"error": "<id> not found"}` body, not an HTTP error.
pub async fn get_dashboard(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
    Query(query): Query<SchemaQuery>,
) -> Result<Json<DashboardResult>, ApiError> {
    let selection = state.selection(query.schema.as_deref());
    let result =
        vitals_dashboard::build_dashboard(state.source.as_ref(), &selection, &identifier).await?;
    Ok(Json(result))
}
