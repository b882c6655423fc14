//! Error types for the triage workspace.
//!
//! Scoring and question selection are total and never fail. Errors only
//! arise at the edges: validating raw input, loading rule configuration,
//! and reading or writing the history store.

use thiserror::Error;

/// The unified error type for the triage crates.
#[derive(Debug, Error)]
pub enum TriageError {
    /// Raw input failed boundary validation. Every failure found is listed.
    #[error("validation failed: {}", failures.join("; "))]
    Validation { failures: Vec<String> },

    /// A severity outside the 1–10 scale was supplied to a validating constructor.
    #[error("severity {value} is outside the 1-10 scale")]
    InvalidSeverity { value: i64 },

    /// A duration string that is not one of the known buckets.
    #[error("unknown duration bucket '{value}'")]
    UnknownDuration { value: String },

    /// A keyword rule file is missing, malformed, or inconsistent.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// The key-value store could not complete a read or write.
    #[error("storage failed: {reason}")]
    StorageFailed { reason: String },

    /// A value could not be encoded or decoded as JSON.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },

    /// A record addressed by id does not exist.
    #[error("{kind} '{id}' not found")]
    NotFound { kind: String, id: String },
}

/// Convenience alias used throughout the triage crates.
///
/// Named `Result` rather than `TriageResult` because the assessment output
/// record already owns that name.
pub type Result<T, E = TriageError> = std::result::Result<T, E>;
