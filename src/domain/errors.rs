//! Domain error types
//!
//! This module defines the error hierarchy for postfetch. All errors are
//! domain-specific and don't expose third-party types. Note that per-fetch
//! failures are *not* errors - they are captured as
//! [`FailureReason`](super::outcome::FailureReason) variants inside the
//! outcome set. The error type below covers the fatal classes only:
//! configuration, sink-level storage/export failures, and I/O.

use thiserror::Error;

/// Main postfetch error type
///
/// This is the primary error type used throughout the application.
#[derive(Debug, Error)]
pub enum PostFetchError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Relational sink errors (schema creation, batch upsert)
    ///
    /// These abort the run; they are never downgraded to a log line.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Tabular export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for PostFetchError {
    fn from(err: std::io::Error) -> Self {
        PostFetchError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for PostFetchError {
    fn from(err: serde_json::Error) -> Self {
        PostFetchError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for PostFetchError {
    fn from(err: toml::de::Error) -> Self {
        PostFetchError::Configuration(format!("TOML parse error: {err}"))
    }
}
