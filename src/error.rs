//! Centralized error types for attachview.
//!
//! Classification, gallery collection, and composition are total and never
//! fail. These errors only cover loading input and addressing it from the CLI.

use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the attachview library.
#[derive(Error, Debug)]
pub enum PreviewError {
    /// I/O error with the associated file path.
    #[error("I/O error reading '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The specified input file does not exist.
    #[error("Attachment file not found: {0}")]
    FileNotFound(PathBuf),

    /// The input file is not a valid attachment list.
    #[error("Invalid attachment list in '{path}': {reason}")]
    InvalidInput { path: PathBuf, reason: String },

    /// An attachment index past the end of the list.
    #[error("Attachment index {index} out of range (list has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    /// The addressed attachment is not classified as an image.
    #[error("Attachment {0} is not an image")]
    NotAnImage(usize),
}

/// Convenience alias for `Result<T, PreviewError>`.
pub type Result<T> = std::result::Result<T, PreviewError>;

impl PreviewError {
    /// Create an `Io` variant from a path and an `io::Error`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
