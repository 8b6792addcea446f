//! Unified error types for chatstats.
//!
//! This module provides a single [`ChatstatsError`] enum that covers every
//! failure the library can report. Parsing itself never fails: malformed
//! timestamps are filtered out, not raised. Errors come from the edges
//! (reading files, loading stopwords, writing output).
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Configuration errors** (missing stopword list) are never masked

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatstats operations.
///
/// # Example
///
/// ```rust
/// use chatstats::error::Result;
/// use chatstats::ChatRecord;
///
/// fn load() -> Result<Vec<ChatRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstatsError>;

/// The error type for all chatstats operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatsError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input export doesn't exist or isn't valid UTF-8
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The stopword list could not be loaded.
    ///
    /// This is a configuration error and is fatal at startup.
    #[error("Failed to load stopword list from {}: {source}", path.display())]
    Stopwords {
        /// Path that was requested
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A configuration value is out of range or inconsistent.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong
        message: String,
    },

    /// An output format name or file extension was not recognised.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// What kind of format was being selected (e.g. "report", "records")
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChatstatsError {
    /// Creates a stopword loading error.
    pub fn stopwords(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ChatstatsError::Stopwords {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        ChatstatsError::InvalidConfig {
            message: message.into(),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatstatsError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatsError::Io(_))
    }

    /// Returns `true` if this error stems from configuration
    /// (stopwords or analyzer settings).
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            ChatstatsError::Stopwords { .. } | ChatstatsError::InvalidConfig { .. }
        )
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatstatsError::InvalidFormat { .. })
    }
}
