//! Sparse grid holding decoded cell strings.

use crate::common::{Error, Result};
use std::borrow::Cow;

/// Value of a cell that was never written.
pub const BLANK_CELL: &str = " ";

/// A cell's text. Padding cells borrow [`BLANK_CELL`] instead of allocating.
pub type Cell = Cow<'static, str>;

const BLANK: Cell = Cow::Borrowed(BLANK_CELL);

/// Bounds on how far a document may grow the table.
///
/// Coordinates come straight from the input, so a single record could
/// otherwise ask for billions of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLimits {
    /// Largest accepted X
    pub max_columns: u32,
    /// Largest accepted Y
    pub max_rows: u32,
    /// Most cells, padding included, the table may hold
    pub max_cells: usize,
}

impl Default for TableLimits {
    fn default() -> Self {
        Self {
            max_columns: 16_384,
            max_rows: 1_048_576,
            max_cells: 10_000_000,
        }
    }
}

/// Rows of decoded cell strings addressed by 1-based `(x, y)` coordinates.
///
/// SYLK records may arrive in any order, so the grid grows on demand: writing
/// to row `y` creates every missing row up to it, each padded with blank cells
/// up to the column that triggered the growth. Rows may end up with different
/// widths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Vec<Cell>>,
    cells: usize,
    limits: TableLimits,
}

impl Table {
    /// Create an empty table with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: TableLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    pub fn limits(&self) -> TableLimits {
        self.limits
    }

    /// Write `value` at column `x`, row `y` (both 1-based).
    ///
    /// Missing rows are always created. A blank value (`""` or `" "`) does not
    /// widen the target row and never overwrites an existing cell. A write
    /// that would break the table's limits fails before anything is changed.
    pub fn set(&mut self, x: u32, y: u32, value: impl Into<String>) -> Result<()> {
        if x == 0 || y == 0 {
            return Err(Error::InvalidCoordinate { x, y });
        }
        if x > self.limits.max_columns || y > self.limits.max_rows {
            return Err(Error::CoordinateOutOfRange {
                x,
                y,
                max_columns: self.limits.max_columns,
                max_rows: self.limits.max_rows,
            });
        }

        let value = value.into();
        let blank = is_blank(&value);
        let (width, count) = (x as usize, y as usize);
        let (col, row) = (width - 1, count - 1);

        // New rows are created `width` wide, so only an existing row can need
        // widening.
        let new_rows = count.saturating_sub(self.rows.len());
        let mut growth = new_rows.saturating_mul(width);
        if !blank {
            let current = self.rows.get(row).map_or(width, Vec::len);
            growth += width.saturating_sub(current);
        }
        let total = self.cells.saturating_add(growth);
        if total > self.limits.max_cells {
            return Err(Error::TableTooLarge {
                cells: total,
                limit: self.limits.max_cells,
            });
        }
        self.cells = total;

        self.ensure_rows(count, width);
        if blank {
            return Ok(());
        }

        let cells = &mut self.rows[row];
        ensure_width(cells, width);
        cells[col] = Cow::Owned(value);
        Ok(())
    }

    /// Read the cell at `(x, y)`; `None` outside the written area.
    pub fn get(&self, x: u32, y: u32) -> Option<&str> {
        let col = (x as usize).checked_sub(1)?;
        let row = (y as usize).checked_sub(1)?;
        self.rows.get(row)?.get(col).map(Cell::as_ref)
    }

    /// Cells of row `y` (1-based).
    pub fn row(&self, y: u32) -> Option<&[Cell]> {
        let row = (y as usize).checked_sub(1)?;
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Number of cells held, padding included.
    pub fn cell_count(&self) -> usize {
        self.cells
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate rows in ascending order. Can be called any number of times.
    pub fn rows(&self) -> Rows<'_> {
        Rows {
            inner: self.rows.iter(),
        }
    }

    /// Grow the table to at least `count` rows, padding new rows to `width`.
    fn ensure_rows(&mut self, count: usize, width: usize) {
        if self.rows.len() < count {
            self.rows.resize_with(count, || vec![BLANK; width]);
        }
    }
}

/// Grow `row` with blank cells until it holds at least `width` cells.
fn ensure_width(row: &mut Vec<Cell>, width: usize) {
    if row.len() < width {
        row.resize(width, BLANK);
    }
}

fn is_blank(value: &str) -> bool {
    value.is_empty() || value == BLANK_CELL
}

/// Iterator over the rows of a [`Table`].
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    inner: std::slice::Iter<'a, Vec<Cell>>,
}

impl<'a> Iterator for Rows<'a> {
    type Item = &'a [Cell];

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Vec::as_slice)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Rows<'_> {}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a [Cell];
    type IntoIter = Rows<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows()
    }
}
