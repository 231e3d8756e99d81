//! Error types shared by the statistics client and store.

/// Failure surfaced to callers of the fetch layer.
///
/// The remote service's failure modes (unreachable, unauthorized, not found,
/// server error, malformed body) all collapse into [`AppError::FetchFailed`];
/// callers only need to know that no data arrived.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("Failed to fetch {endpoint}: {reason}")]
    FetchFailed { endpoint: String, reason: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

impl AppError {
    pub fn fetch_failed(endpoint: impl Into<String>, reason: impl ToString) -> Self {
        Self::FetchFailed {
            endpoint: endpoint.into(),
            reason: reason.to_string(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Returns true for failures produced by the remote service round-trip.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::FetchFailed { .. })
    }
}
