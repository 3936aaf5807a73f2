//! Error handling for growth screening.
//!
//! Only the edges of the system produce errors: reading reference tables,
//! validating submitted measurements and calling the narrative service.
//! The z-score pipeline itself expresses "no result" with `Option`.

pub mod util;

use std::io;
use std::path::{Path, PathBuf};

use arrow::error::ArrowError;
use parquet::errors::ParquetError;

/// Errors that can occur while loading references or talking to collaborators
#[derive(Debug, thiserror::Error)]
pub enum GrowthError {
    /// Error opening or reading a file
    #[error("IO error for {}: {context}", path.display())]
    Io {
        path: PathBuf,
        context: String,
        #[source]
        source: io::Error,
    },

    /// File or directory missing or of the wrong kind
    #[error("{message}: {}", path.display())]
    NotFound { path: PathBuf, message: String },

    /// Arrow error while decoding a reference table
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Parquet error while decoding a reference table
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    /// A required column could not be found in a reference table
    #[error("Column '{column}' not found in {table} (tried: {candidates})")]
    MissingColumn {
        table: String,
        column: &'static str,
        candidates: String,
    },

    /// Reference data is unusable as a whole
    #[error("Invalid reference data: {0}")]
    InvalidReference(String),

    /// Submitted measurement failed validation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Narrative service returned something unusable
    #[error("Narrative error: {0}")]
    Narrative(String),

    /// Transport failure talking to the narrative service
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl GrowthError {
    /// Build an IO error carrying the path and what we were doing with it
    pub fn io(path: &Path, context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            context: context.into(),
            source,
        }
    }

    pub fn not_found(path: &Path, message: impl Into<String>) -> Self {
        Self::NotFound {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

/// Result type for growth screening operations
pub type Result<T> = std::result::Result<T, GrowthError>;
