//! Rectangular grid of cell values

use crate::cell::CellValue;
use crate::error::{Error, Result};

/// A rectangular table: one header row plus zero or more data rows.
///
/// Every row has exactly as many cells as the header; the shape is checked
/// once at construction, so downstream formatting can index columns without
/// re-validating. A ragged input is rejected with
/// [`Error::MalformedGrid`] instead of producing misaligned output.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    header: Vec<CellValue>,
    rows: Vec<Vec<CellValue>>,
}

impl Grid {
    /// Build a grid from a header row and data rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyHeader`] if the header has no cells, or
    /// [`Error::MalformedGrid`] if any data row's cell count differs from
    /// the header's.
    pub fn new(header: Vec<CellValue>, rows: Vec<Vec<CellValue>>) -> Result<Self> {
        if header.is_empty() {
            return Err(Error::EmptyHeader);
        }
        let expected = header.len();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != expected {
                return Err(Error::MalformedGrid {
                    row,
                    expected,
                    actual: cells.len(),
                });
            }
        }
        Ok(Grid { header, rows })
    }

    /// The header row
    pub fn header(&self) -> &[CellValue] {
        &self.header
    }

    /// The data rows, in source order
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Number of columns (the header's cell count)
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Number of data rows (the header is not counted)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the grid has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
