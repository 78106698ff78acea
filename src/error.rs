//! Error types for dynplot.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for dynplot operations.
pub type Result<T> = std::result::Result<T, DynPlotError>;

/// Errors that can occur while ingesting data or loading configuration.
#[derive(Debug, Error)]
pub enum DynPlotError {
    /// Failed to open a file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader failed (bad header, invalid UTF-8, ...).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The CSV header row is absent (empty file).
    #[error("CSV file has no header row: {path}")]
    MissingHeader { path: PathBuf },

    /// Manual entry text is not a number and the entry policy is strict.
    #[error("{field} value is not a number: {text:?}")]
    InvalidNumber { field: &'static str, text: String },

    /// Settings file could not be parsed.
    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DynPlotError {
    /// Create a FileOpen error.
    pub fn file_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileOpen {
            path: path.into(),
            source,
        }
    }

    /// Create an InvalidNumber error.
    pub fn invalid_number(field: &'static str, text: impl Into<String>) -> Self {
        Self::InvalidNumber {
            field,
            text: text.into(),
        }
    }
}
