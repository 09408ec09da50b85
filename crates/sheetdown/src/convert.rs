//! One-call spreadsheet-to-table conversion
//!
//! The whole pipeline behind a single function: read the first sheet of the
//! source workbook, render it as an aligned pipe table, write the table to
//! the destination. Callers own all reporting; nothing here prints.
//!
//! # Example
//!
//! ```rust,no_run
//! use sheetdown::convert_file;
//!
//! let stats = convert_file("Demo Data.xlsx", "Demo Data.md").unwrap();
//! println!("{} rows, {} columns", stats.data_rows, stats.columns);
//! ```

use std::path::Path;

use thiserror::Error;

use sheetdown_md::MarkdownWriter;
use sheetdown_xlsx::XlsxReader;

/// Result type for conversions
pub type ConvertResult<T> = std::result::Result<T, ConvertError>;

/// Errors from a conversion run, split by which side failed
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The source could not be read (missing file, corrupt workbook,
    /// empty first sheet)
    #[error("Read error: {0}")]
    Read(#[from] sheetdown_xlsx::XlsxError),

    /// The destination could not be written
    #[error("Write error: {0}")]
    Write(#[from] sheetdown_md::MarkdownError),
}

/// Statistics from a conversion run
#[derive(Debug, Clone, Default)]
pub struct ConvertStats {
    /// Columns in the converted grid
    pub columns: usize,
    /// Data rows written (the header line is not counted)
    pub data_rows: usize,
}

/// Convert a spreadsheet file into an aligned pipe-table file.
///
/// Reads the first sheet of `source`, renders it, and writes the table to
/// `destination` through a single create-or-truncate open. Exactly one read
/// and one write happen per call; nothing is retried, and a write that fails
/// midway leaves whatever the failed write left behind.
///
/// Returns the grid's dimensions so the caller can report success however it
/// likes, and only once the write has actually succeeded.
pub fn convert_file<P, Q>(source: P, destination: Q) -> ConvertResult<ConvertStats>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let grid = XlsxReader::read_file(source)?;
    log::debug!(
        "read grid with {} columns and {} data rows",
        grid.column_count(),
        grid.row_count()
    );
    MarkdownWriter::write_file(&grid, destination)?;
    Ok(ConvertStats {
        columns: grid.column_count(),
        data_rows: grid.row_count(),
    })
}
