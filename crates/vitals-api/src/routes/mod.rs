pub mod dashboard;
pub mod health;
pub mod members;
pub mod schemas;

use serde::Deserialize;

/// Optional `?schema=<id|auto>` override.
#[derive(Debug, Default, Deserialize)]
pub struct SchemaQuery {
    pub schema: Option<String>,
}
