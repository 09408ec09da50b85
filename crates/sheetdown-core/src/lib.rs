//! # sheetdown-core
//!
//! Core data structures for the sheetdown table converter.
//!
//! This crate provides the types shared by the reader and writer crates:
//! - [`CellValue`] - Cell values, rendered to text through one uniform rule
//! - [`Grid`] - A validated rectangular table (header row plus data rows)
//! - [`display_width`] / [`column_widths`] - The display-width model columns
//!   are aligned against
//!
//! ## Example
//!
//! ```rust
//! use sheetdown_core::{column_widths, CellValue, Grid};
//!
//! let grid = Grid::new(
//!     vec![CellValue::from("Name"), CellValue::from("Age")],
//!     vec![
//!         vec![CellValue::from("Alice"), CellValue::from(30)],
//!         vec![CellValue::from("佑"), CellValue::from(5)],
//!     ],
//! )
//! .unwrap();
//!
//! // "Alice" is the widest cell in column 0; the header wins column 1.
//! assert_eq!(column_widths(&grid), vec![5, 3]);
//! ```

pub mod cell;
pub mod error;
pub mod grid;
pub mod width;

// Re-exports for convenience
pub use cell::{CellError, CellValue};
pub use error::{Error, Result};
pub use grid::Grid;
pub use width::{column_widths, display_width};
