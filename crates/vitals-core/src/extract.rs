use crate::descriptor::{join_template, FieldDescriptor, FieldSpec};
use crate::error::CoreError;
use crate::grid::RowRef;

/// Read one raw field from a row.
///
/// The lookup fails when the column is not in the header set, lies past the
/// grid width, or lies past the end of this row. A failed lookup yields the
/// descriptor's default, or `MissingColumn` when none is declared.
pub fn extract(row: &RowRef<'_, '_>, descriptor: &FieldDescriptor) -> Result<String, CoreError> {
    let cell = row
        .view()
        .column_position(&descriptor.address)
        .and_then(|position| row.cell(position));

    match cell {
        Some(value) => Ok(value.to_string()),
        None => descriptor
            .default
            .clone()
            .ok_or_else(|| CoreError::MissingColumn {
                column: descriptor.address.clone(),
            }),
    }
}

/// Extract a full field spec. Composite halves fall back independently; a
/// defaulted half still takes part in the join.
pub fn extract_spec(row: &RowRef<'_, '_>, spec: &FieldSpec) -> Result<String, CoreError> {
    match spec {
        FieldSpec::Single { field } => extract(row, field),
        FieldSpec::Composite {
            first,
            second,
            template,
        } => {
            let a = extract(row, first)?;
            let b = extract(row, second)?;
            Ok(join_template(template, &a, &b))
        }
    }
}
