//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Raised when `PageFacts` cannot be turned into observations.
///
/// Fatal to the single audit it belongs to: no partial `AuditResult` is
/// produced. Missing *optional* data never raises this error; it becomes an
/// absent observation instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizationError {
    /// The parser produced no document at all
    #[error("page facts for {url} contain no document")]
    MissingDocument { url: String },

    /// The page URL is empty or not an http(s) URL
    #[error("invalid page url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Heading levels must be in 1..=6
    #[error("heading '{text}' has invalid level {level}")]
    InvalidHeadingLevel { level: u8, text: String },

    /// A signal was stored under a kind it does not belong to
    #[error("signal stored as {expected} carries {found} data")]
    SignalKindMismatch { expected: String, found: String },

    /// Two observations were produced for the same key
    #[error("observation '{0}' produced more than once")]
    DuplicateObservation(String),
}

/// Main error type for seoaudit operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Page facts could not be normalized
    #[error(transparent)]
    Normalization(#[from] NormalizationError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Rule catalog construction errors
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
