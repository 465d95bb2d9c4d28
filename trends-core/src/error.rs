//! Error types for the pipeline

use std::path::PathBuf;

use thiserror::Error;

/// Pipeline-wide error type
#[derive(Error, Debug)]
pub enum TrendsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Ingest error: {0}")]
    Ingest(String),
}

impl TrendsError {
    pub fn config(msg: impl Into<String>) -> Self {
        TrendsError::Config(msg.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TrendsError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn ingest(msg: impl Into<String>) -> Self {
        TrendsError::Ingest(msg.into())
    }
}

/// Result type alias for pipeline operations
pub type TrendsResult<T> = Result<T, TrendsError>;
