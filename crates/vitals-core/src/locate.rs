use tracing::debug;

use crate::descriptor::ColumnAddress;
use crate::error::CoreError;
use crate::grid::{RowRef, SheetView};

/// Resolve the identifier column to a position.
///
/// `Ok(None)` means the column can't exist in this grid (positional index
/// past the width, or an empty grid). A header row that lacks a named
/// identifier column is a misconfigured mapping.
fn identifier_position(
    view: &SheetView<'_>,
    identifier_column: &ColumnAddress,
) -> Result<Option<usize>, CoreError> {
    if view.grid().is_empty() {
        return Ok(None);
    }

    match (view.column_position(identifier_column), identifier_column) {
        (Some(position), _) => Ok(Some(position)),
        (None, ColumnAddress::Index(_)) => Ok(None),
        (None, ColumnAddress::Name(_)) => Err(CoreError::MissingColumn {
            column: identifier_column.clone(),
        }),
    }
}

/// Find the first data row whose identifier cell equals `identifier`.
///
/// Comparison is exact: case-sensitive and untrimmed. Duplicate identifiers
/// resolve to the earliest row.
pub fn locate<'v, 'g>(
    view: &'v SheetView<'g>,
    identifier_column: &ColumnAddress,
    identifier: &str,
) -> Result<Option<RowRef<'v, 'g>>, CoreError> {
    let Some(position) = identifier_position(view, identifier_column)? else {
        return Ok(None);
    };

    let found = view
        .grid()
        .data_rows()
        .find(|(_, cells)| cells.get(position).is_some_and(|cell| cell == identifier))
        .and_then(|(index, _)| view.row(index));

    match &found {
        Some(row) => debug!(identifier, row = row.index(), "member row located"),
        None => debug!(identifier, "no row matched identifier"),
    }

    Ok(found)
}

/// Identifier cell of every data row, in grid order, duplicates included.
/// Rows too short to hold the cell contribute an empty string.
pub fn identifiers(
    view: &SheetView<'_>,
    identifier_column: &ColumnAddress,
) -> Result<Vec<String>, CoreError> {
    let Some(position) = identifier_position(view, identifier_column)? else {
        return Ok(Vec::new());
    };

    Ok(view
        .grid()
        .data_rows()
        .map(|(_, cells)| cells.get(position).cloned().unwrap_or_default())
        .collect())
}
