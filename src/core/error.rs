//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`NavigationError`] - Unknown view identifiers
//! - [`SubmissionError`] - Lead relay request failures
//! - [`SubmitRejected`] - Submit attempts refused by the form state machine

use thiserror::Error;

/// Errors raised when resolving a view from its string identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// No view is registered under this identifier
    #[error("unknown view: {0}")]
    UnknownView(String),
}

/// Network/relay errors for outbound lead submissions.
///
/// Callers never see the variant in the UI; any of these collapses into
/// [`SubmissionState::Failed`](crate::core::lead::SubmissionState::Failed).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// Payload could not be encoded as JSON
    #[error("failed to encode payload: {0}")]
    Encode(String),
    /// Request never produced a response (offline, CORS, DNS)
    #[error("network error: {0}")]
    Network(String),
    /// Relay answered with a non-2xx status
    #[error("relay returned HTTP {0}")]
    Status(u16),
    /// Relay answered 2xx but the body was not JSON
    #[error("relay response was not valid JSON")]
    InvalidBody,
}

/// Reasons a submit attempt is refused before any request is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    /// A request for this form is still in flight
    #[error("a submission is already in progress")]
    InFlight,
    /// The form already succeeded and shows its confirmation
    #[error("form was already submitted")]
    AlreadySubmitted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            NavigationError::UnknownView("blog".into()).to_string(),
            "unknown view: blog"
        );
        assert_eq!(
            SubmissionError::Status(502).to_string(),
            "relay returned HTTP 502"
        );
        assert_eq!(
            SubmitRejected::InFlight.to_string(),
            "a submission is already in progress"
        );
    }
}
