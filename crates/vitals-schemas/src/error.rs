use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("unknown schema: {0}")]
    UnknownSchema(String),

    #[error("no registered schema matches the sheet layout")]
    NoMatchingSchema,
}
