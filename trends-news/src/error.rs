//! Error types for the news module

use std::path::PathBuf;

use thiserror::Error;
use trends_core::TrendsError;

/// Errors that can occur while ingesting news files
#[derive(Debug, Error)]
pub enum NewsError {
    /// The news directory is missing or unreadable
    #[error("News directory {} is not readable: {source}", .path.display())]
    Directory {
        /// Directory that was enumerated
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A single file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    FileRead {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A file is not valid JSON
    #[error("Parse error in {}: {message}", .path.display())]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// A file is valid JSON but not a news file
    #[error("Schema error in {}: {message}", .path.display())]
    Schema {
        /// File that failed
        path: PathBuf,
        /// What was wrong with the document
        message: String,
    },

    /// An item inside a file failed validation
    #[error("Invalid item: {0}")]
    InvalidItem(String),
}

impl NewsError {
    /// Whether this error only affects one file or item
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, NewsError::Directory { .. })
    }
}

impl From<NewsError> for TrendsError {
    fn from(err: NewsError) -> Self {
        match err {
            NewsError::Directory { path, source } | NewsError::FileRead { path, source } => {
                TrendsError::io(path, source)
            }
            other => TrendsError::ingest(other.to_string()),
        }
    }
}
