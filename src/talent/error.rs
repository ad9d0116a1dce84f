//! Scoring error types

use std::path::PathBuf;
use thiserror::Error;

/// Error types for scoring operations
///
/// Missing evidence, malformed analyzer reports and empty denominators are all
/// recovered inside the scorers. Only genuinely invalid inputs surface here.
#[derive(Debug, Error)]
pub enum ScoringError {
    /// Input shape is invalid (non-finite score, out-of-range value, future timestamp)
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Configuration could not be parsed or applied
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem failure while collecting evidence
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Pluggable assessor failed
    #[error("Assessment failed: {0}")]
    Assessment(String),

    /// Background scoring task was dropped before producing a result
    #[error("Scoring task failed: {0}")]
    Task(String),
}

/// Convenience result alias for scoring operations
pub type ScoringResult<T> = Result<T, ScoringError>;

impl ScoringError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        ScoringError::Validation(msg.into())
    }
}

/// Per-file failure, kept apart from a valid score so aggregation can skip it
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileScoreError {
    /// Content is not valid UTF-8 text
    #[error("File is not valid UTF-8 text (first invalid byte at offset {valid_up_to})")]
    Decode { valid_up_to: usize },

    /// File exceeds the configured size limit
    #[error("File too large: {size} bytes (max: {max} bytes)")]
    TooLarge { size: u64, max: u64 },

    /// File could not be read from disk
    #[error("Failed to read file: {0}")]
    Read(String),
}
