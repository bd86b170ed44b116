use serde::Deserialize;

use vitals_core::grid::Grid;

/// Body of `GET /v4/spreadsheets/{id}/values/{range}`.
///
/// Only `values` is read. It is omitted entirely when the range is empty.
/// Trailing empty cells of a row are omitted too, which is why grids are
/// ragged.
#[derive(Debug, Default, Deserialize)]
pub struct ValueRange {
    #[serde(default)]
    pub values: Vec<Vec<serde_json::Value>>,
}

impl ValueRange {
    pub fn into_grid(self) -> Grid {
        Grid::new(
            self.values
                .into_iter()
                .map(|row| row.into_iter().map(cell_text).collect())
                .collect(),
        )
    }
}

/// Formatted values arrive as strings; anything else is rendered as text.
fn cell_text(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Values endpoint URL, with the ID and range percent-encoded as path
/// segments.
pub fn values_url(api_base: &str, spreadsheet_id: &str, range: &str) -> String {
    format!(
        "{}/v4/spreadsheets/{}/values/{}",
        api_base.trim_end_matches('/'),
        urlencoding::encode(spreadsheet_id),
        urlencoding::encode(range),
    )
}
