//! Markdown error types

use thiserror::Error;

/// Result type for Markdown table operations
pub type MarkdownResult<T> = std::result::Result<T, MarkdownError>;

/// Errors that can occur during Markdown table operations
#[derive(Debug, Error)]
pub enum MarkdownError {
    /// IO error (unwritable destination, failed write or flush)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
