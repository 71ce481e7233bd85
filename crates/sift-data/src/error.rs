//! Error types for table loading and export.

use thiserror::Error;

/// A specialized Result type for data I/O operations.
pub type DataResult<T> = Result<T, DataError>;

/// Errors that can occur while loading or exporting tabular files.
#[derive(Debug, Error)]
pub enum DataError {
    /// Underlying file I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed delimited input.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed JSON input.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A file extension sift recognizes but cannot read or write.
    #[error("unsupported file format: .{extension}")]
    UnsupportedFormat {
        /// The offending extension, lowercased, without the dot.
        extension: String,
    },
}
