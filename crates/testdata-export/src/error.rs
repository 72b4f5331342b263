//! Error types for exporting and reading back test data files.

use std::path::PathBuf;
use testdata_core::ErrorKind;
use thiserror::Error;

/// Result alias using [`ExportError`].
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors that can occur while exporting or reading back a file.
#[derive(Error, Debug)]
pub enum ExportError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Renaming the temporary file over the destination failed.
    #[error("Failed to move export into place: {0}")]
    Persist(#[from] tempfile::PersistError),

    /// A value in a file could not be read as its field's kind.
    #[error(transparent)]
    Value(#[from] testdata_core::Error),

    /// A file does not have the expected top-level structure.
    #[error("Unexpected content in {path}: {detail}")]
    Shape { path: PathBuf, detail: String },

    /// Export format name did not match `json` or `csv`.
    #[error("Unknown export format: {0} (expected json or csv)")]
    UnknownFormat(String),

    /// File stem is empty or would escape the output directory.
    #[error("Invalid file name '{0}'")]
    InvalidFileName(String),
}

impl ExportError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExportError::Value(e) => e.kind(),
            ExportError::Shape { .. }
            | ExportError::UnknownFormat(_)
            | ExportError::InvalidFileName(_) => ErrorKind::Validation,
            ExportError::Io(_)
            | ExportError::Csv(_)
            | ExportError::Json(_)
            | ExportError::Persist(_) => ErrorKind::Io,
        }
    }
}
