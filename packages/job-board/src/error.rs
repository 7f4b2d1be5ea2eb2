//! The one error the job list view ever shows.

use remotive_client::RemotiveError;
use thiserror::Error;

/// A listing page could not be loaded.
///
/// Transport failures, non-success statuses and malformed bodies all collapse
/// into this; the message is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FetchFailure {
    message: String,
}

impl FetchFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<RemotiveError> for FetchFailure {
    fn from(err: RemotiveError) -> Self {
        Self::new(err.to_string())
    }
}
