use serde::{Deserialize, Serialize};

use super::cell::Cell;

/// A display-independent snapshot of a [`Board`](super::board::Board).
///
/// Holds the cell contents row by row (top row first) and one label per
/// column: `Some(column)` when a piece can still be dropped there, `None` when
/// the column is full. Colors, padding and separators are left to whoever
/// draws it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedBoard {
    cells: Vec<Vec<Cell>>,
    column_labels: Vec<Option<usize>>,
}

impl RenderedBoard {
    pub(crate) fn new(cells: Vec<Vec<Cell>>, column_labels: Vec<Option<usize>>) -> Self {
        Self {
            cells,
            column_labels,
        }
    }

    /// Returns an iterator over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }

    #[must_use]
    pub fn column_labels(&self) -> &[Option<usize>] {
        &self.column_labels
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.column_labels.len()
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.cells.len()
    }
}
