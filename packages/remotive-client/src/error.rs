//! Error types for the Remotive client.

use thiserror::Error;

/// Result type for Remotive client operations.
pub type Result<T> = std::result::Result<T, RemotiveError>;

/// Remotive client errors.
///
/// Payloads are plain strings so a failed request can be shared between
/// callers waiting on the same in-flight load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemotiveError {
    /// Network error (connection refused, DNS, request aborted)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response
    #[error("Failed to fetch jobs (HTTP {status})")]
    Api { status: u16, message: String },

    /// Body was not a listing payload
    #[error("Unexpected response from job listing API: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for RemotiveError {
    fn from(err: reqwest::Error) -> Self {
        RemotiveError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for RemotiveError {
    fn from(err: serde_json::Error) -> Self {
        RemotiveError::Parse(err.to_string())
    }
}
