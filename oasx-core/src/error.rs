//! Error types for oasx-core.
//!
//! Only the boundaries can fail: discovering source files and parsing
//! them. The extraction engine itself is total — every successfully
//! parsed input produces a result.

use thiserror::Error;

/// Result type alias for oasx-core operations.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors that can occur at the scanning and parsing boundaries.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Source directory does not exist or is not a directory.
    #[error("Source directory not found: {path}")]
    SourceDirNotFound {
        /// Path that was searched.
        path: String,
    },

    /// Walking the source directory failed.
    #[error("Failed to scan {path}: {message}")]
    ScanError {
        /// Directory being scanned.
        path: String,
        /// Description of the walk error.
        message: String,
    },

    /// Reading a discovered source file failed.
    #[error("Failed to read {path}: {source}")]
    ReadError {
        /// File that could not be read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Tree-sitter could not be configured or produced no tree.
    #[error("Failed to parse {path}: {message}")]
    ParseError {
        /// File that could not be parsed.
        path: String,
        /// Description of the parser error.
        message: String,
    },
}
