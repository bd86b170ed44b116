use serde::Serialize;

use vitals_core::descriptor::{FieldDescriptor, FieldSpec};

/// One row of a mapping table: a canonical key and how to fill it.
#[derive(Debug, Clone, Serialize)]
pub struct MetricField {
    pub key: String,
    pub spec: FieldSpec,
    pub description: Option<String>,
}

impl MetricField {
    pub fn new(key: &str, spec: impl Into<FieldSpec>) -> Self {
        Self {
            key: key.to_string(),
            spec: spec.into(),
            description: None,
        }
    }

    pub fn describe(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

/// Column at a fixed zero-based index.
pub fn at(index: usize) -> FieldDescriptor {
    FieldDescriptor::indexed(index)
}

/// Column under a header name.
pub fn col(name: &str) -> FieldDescriptor {
    FieldDescriptor::named(name)
}

/// Blood pressure as "systolic / diastolic".
pub fn pressure(systolic: FieldDescriptor, diastolic: FieldDescriptor) -> FieldSpec {
    FieldSpec::composite(systolic, diastolic, "{a} / {b}")
}
