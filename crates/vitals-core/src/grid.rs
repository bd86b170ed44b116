use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::descriptor::{Addressing, ColumnAddress};

/// The two-dimensional text grid returned by a data source.
///
/// Rows may be ragged. A row shorter than [`Grid::width`] simply has no
/// trailing cells; sources such as Google Sheets drop trailing blanks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = C>,
        C: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Length of the longest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Rows after row 0. Row 0 is a header or a title row under every
    /// addressing mode, so it never carries member data.
    pub fn data_rows(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.rows
            .iter()
            .enumerate()
            .skip(1)
            .map(|(index, row)| (index, row.as_slice()))
    }

    pub fn view(&self, addressing: Addressing) -> SheetView<'_> {
        SheetView::new(self, addressing)
    }
}

/// A grid interpreted under one addressing mode.
///
/// Under [`Addressing::Named`] the header row is indexed once so that name
/// lookups are constant time for every field of every row.
#[derive(Debug)]
pub struct SheetView<'g> {
    grid: &'g Grid,
    addressing: Addressing,
    headers: HashMap<&'g str, usize>,
    width: usize,
}

impl<'g> SheetView<'g> {
    fn new(grid: &'g Grid, addressing: Addressing) -> Self {
        let mut headers = HashMap::new();
        if addressing == Addressing::Named
            && let Some(header_row) = grid.rows().first()
        {
            for (index, name) in header_row.iter().enumerate() {
                // First occurrence of a repeated header wins.
                headers.entry(name.as_str()).or_insert(index);
            }
        }

        Self {
            grid,
            addressing,
            headers,
            width: grid.width(),
        }
    }

    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    pub fn addressing(&self) -> Addressing {
        self.addressing
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Position of a named column in the header row, if present.
    pub fn header_position(&self, name: &str) -> Option<usize> {
        self.headers.get(name).copied()
    }

    /// Position of a column in this grid, or `None` when the grid does not
    /// have it at all (unknown header, or index past the widest row).
    pub fn column_position(&self, address: &ColumnAddress) -> Option<usize> {
        match address {
            ColumnAddress::Name(name) => self.header_position(name),
            ColumnAddress::Index(index) => (*index < self.width).then_some(*index),
        }
    }

    pub fn row(&self, index: usize) -> Option<RowRef<'_, 'g>> {
        self.grid.rows().get(index).map(|cells| RowRef {
            view: self,
            index,
            cells,
        })
    }
}

/// One data row of a [`SheetView`].
#[derive(Debug, Clone, Copy)]
pub struct RowRef<'v, 'g> {
    view: &'v SheetView<'g>,
    index: usize,
    cells: &'g [String],
}

impl<'v, 'g> RowRef<'v, 'g> {
    pub fn view(&self) -> &'v SheetView<'g> {
        self.view
    }

    /// Index of this row in the raw grid (row 0 is the header/title row).
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn cell(&self, position: usize) -> Option<&'g str> {
        self.cells.get(position).map(String::as_str)
    }
}
