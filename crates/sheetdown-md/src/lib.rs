//! # sheetdown-md
//!
//! Markdown pipe-table rendering for sheetdown.
//!
//! [`table_lines`] turns a [`Grid`](sheetdown_core::Grid) into padded,
//! column-aligned pipe rows (header line, blank separator line, data rows);
//! [`MarkdownWriter`] streams those lines to a file or any
//! [`Write`](std::io::Write).
//!
//! ## Example
//!
//! ```rust
//! use sheetdown_core::{CellValue, Grid};
//! use sheetdown_md::table_lines;
//!
//! let grid = Grid::new(
//!     vec![CellValue::from("Name"), CellValue::from("Age")],
//!     vec![vec![CellValue::from("Alice"), CellValue::from(30)]],
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     table_lines(&grid),
//!     vec!["| Name  | Age |", "", "| Alice | 30  |"],
//! );
//! ```

pub mod error;
pub mod table;
pub mod writer;

// Re-exports for convenience
pub use error::{MarkdownError, MarkdownResult};
pub use table::{format_row, table_lines};
pub use writer::MarkdownWriter;
