//! Error types for sheetdown-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sheetdown-core
#[derive(Debug, Error)]
pub enum Error {
    /// A data row's cell count does not match the header's
    #[error("Malformed grid: data row {row} has {actual} cells, expected {expected}")]
    MalformedGrid {
        /// 0-based index of the offending data row
        row: usize,
        /// Cell count of the header row
        expected: usize,
        /// Cell count of the offending row
        actual: usize,
    },

    /// The header row has no cells
    #[error("Grid header row is empty")]
    EmptyHeader,
}
