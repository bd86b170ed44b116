use std::sync::Arc;

use vitals_core::source::GridSource;
use vitals_dashboard::SchemaSelection;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn GridSource>,
    pub schema: SchemaSelection,
}

impl AppState {
    pub fn new(source: Arc<dyn GridSource>, schema: SchemaSelection) -> Self {
        Self { source, schema }
    }

    /// A per-request `?schema=` override wins over the configured selection.
    pub fn selection(&self, requested: Option<&str>) -> SchemaSelection {
        match requested {
            Some(value) => SchemaSelection::parse(value),
            None => self.schema.clone(),
        }
    }
}
