//! Prelude module - common imports for sheetdown users
//!
//! ```rust
//! use sheetdown::prelude::*;
//! ```

pub use crate::{
    // Cell types
    CellError,
    CellValue,
    // Conversion entry point
    convert_file,
    ConvertError,
    ConvertResult,
    ConvertStats,
    // Error types
    Error,
    // Grid and measurement
    column_widths,
    display_width,
    Grid,
    Result,
    // Table rendering
    table_lines,
    MarkdownError,
    MarkdownWriter,
    // Workbook reading
    SheetInfo,
    XlsxError,
    XlsxReader,
};
