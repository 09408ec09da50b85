//! # sheetdown-xlsx
//!
//! XLSX reading boundary for sheetdown, backed by calamine.
//!
//! [`XlsxReader`] turns the first sheet of a workbook into a core
//! [`Grid`](sheetdown_core::Grid) and reports per-sheet dimensions via
//! [`SheetInfo`]. Format parsing is delegated to calamine entirely; this
//! crate only maps decoded cells onto the core value model.

pub mod error;
pub mod reader;

// Re-exports for convenience
pub use error::{XlsxError, XlsxResult};
pub use reader::{SheetInfo, XlsxReader};
