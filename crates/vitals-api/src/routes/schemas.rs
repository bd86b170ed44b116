use axum::extract::Path;
use axum::Json;
use serde::Serialize;

use vitals_core::descriptor::{Addressing, ColumnAddress};
use vitals_schemas::field::MetricField;
use vitals_schemas::{all_schemas, get_schema};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct SchemaSummary {
    id: String,
    name: String,
    addressing: Addressing,
    summary_template: Option<String>,
}

#[derive(Serialize)]
pub struct SchemaDetail {
    id: String,
    name: String,
    addressing: Addressing,
    identifier: ColumnAddress,
    fields: Vec<MetricField>,
    summary_template: Option<String>,
}

pub async fn list_schemas() -> Json<Vec<SchemaSummary>> {
    let schemas = all_schemas()
        .iter()
        .map(|s| SchemaSummary {
            id: s.id().to_string(),
            name: s.name().to_string(),
            addressing: s.addressing(),
            summary_template: s.summary_template().map(str::to_string),
        })
        .collect();
    Json(schemas)
}

pub async fn get_schema_detail(Path(id): Path<String>) -> Result<Json<SchemaDetail>, ApiError> {
    let schema =
        get_schema(&id).ok_or_else(|| ApiError::NotFound(format!("schema not found: {id}")))?;

    Ok(Json(SchemaDetail {
        id: schema.id().to_string(),
        name: schema.name().to_string(),
        addressing: schema.addressing(),
        identifier: schema.identifier().clone(),
        fields: schema.fields().to_vec(),
        summary_template: schema.summary_template().map(str::to_string),
    }))
}
