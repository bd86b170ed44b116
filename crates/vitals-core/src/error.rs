use thiserror::Error;

use crate::descriptor::ColumnAddress;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A descriptor with no default addressed a column the grid does not
    /// have. The mapping table is out of step with the live sheet.
    #[error("missing column {column} (no default declared)")]
    MissingColumn { column: ColumnAddress },
}
