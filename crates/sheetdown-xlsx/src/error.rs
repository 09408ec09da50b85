//! XLSX error types

use thiserror::Error;

/// Result type for XLSX operations
pub type XlsxResult<T> = std::result::Result<T, XlsxError>;

/// Errors that can occur while reading a workbook
#[derive(Debug, Error)]
pub enum XlsxError {
    /// Decoder error: missing or unreadable file, corrupt archive, bad
    /// sheet data. Propagated unchanged from calamine.
    #[error("XLSX error: {0}")]
    Xlsx(#[from] calamine::XlsxError),

    /// The workbook contains no sheets at all
    #[error("Workbook has no sheets")]
    NoSheets,

    /// The sheet has no used cells, so there is no header row to convert
    #[error("Sheet '{0}' is empty")]
    EmptySheet(String),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] sheetdown_core::Error),
}
