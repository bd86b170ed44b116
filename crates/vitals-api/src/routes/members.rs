use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;

use crate::error::ApiError;
use crate::routes::SchemaQuery;
use crate::state::AppState;

#[derive(Serialize)]
pub struct MembersResponse {
    pub members: Vec<String>,
}

/// Every member identifier in the sheet, in row order.
pub async fn list_members(
    State(state): State<AppState>,
    Query(query): Query<SchemaQuery>,
) -> Result<Json<MembersResponse>, ApiError> {
    let selection = state.selection(query.schema.as_deref());
    let members = vitals_dashboard::list_members(state.source.as_ref(), &selection).await?;
    Ok(Json(MembersResponse { members }))
}
