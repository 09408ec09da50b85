//! # sheetdown
//!
//! Convert spreadsheets into padded, column-aligned Markdown pipe tables.
//!
//! The first sheet of a workbook becomes a text table whose columns stay
//! aligned under a fixed-pitch display model, mixed CJK and ASCII content
//! included. The header line is followed by a blank line, then one line per
//! data row:
//!
//! ```text
//! | Name  | Age |
//!
//! | Alice | 30  |
//! | 佑    | 5   |
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use sheetdown::prelude::*;
//!
//! let stats = convert_file("Demo Data.xlsx", "Demo Data.md").unwrap();
//! println!("wrote {} data rows", stats.data_rows);
//! ```
//!
//! The pipeline's pieces are usable on their own: [`XlsxReader`] produces a
//! validated [`Grid`], [`table_lines`] renders it, and [`MarkdownWriter`]
//! streams the lines to a file or any writer.

pub mod convert;
pub mod prelude;

// Re-export conversion types
pub use convert::{convert_file, ConvertError, ConvertResult, ConvertStats};

// Re-export core types
pub use sheetdown_core::{column_widths, display_width, CellError, CellValue, Error, Grid, Result};

// Re-export I/O types
pub use sheetdown_md::{format_row, table_lines, MarkdownError, MarkdownResult, MarkdownWriter};
pub use sheetdown_xlsx::{SheetInfo, XlsxError, XlsxReader, XlsxResult};
