//! Error types for perfilar.

use std::path::PathBuf;

/// Result type alias for perfilar operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in perfilar operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        /// The path where the error occurred, if known.
        path: Option<PathBuf>,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Arrow error during data processing.
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Parquet error during file operations.
    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    /// A loaded file produced no data at all.
    #[error("Table is empty")]
    EmptyTable,

    /// Schema mismatch between record batches.
    #[error("Schema mismatch: {message}")]
    SchemaMismatch {
        /// Description of the schema mismatch.
        message: String,
    },

    /// Unsupported file format.
    #[error("Unsupported format: {format}")]
    UnsupportedFormat {
        /// The unsupported format name or extension.
        format: String,
    },

    /// Output formatting/serialization error.
    #[error("Format error: {0}")]
    Format(String),
}

impl Error {
    /// Create an I/O error with a path context.
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            path: Some(path.into()),
            source,
        }
    }

    /// Create a schema mismatch error.
    pub fn schema_mismatch(message: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            message: message.into(),
        }
    }

    /// Create an unsupported format error.
    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }
}
