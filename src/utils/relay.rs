//! HTTP transport for the third-party form relay.
//!
//! One POST per submission, JSON in and JSON out. No timeout and no retry:
//! a request that never settles leaves its form in `Submitting`.

use gloo_net::http::Request;

use crate::config::LEAD_ENDPOINT;
use crate::core::error::SubmissionError;
use crate::core::{LeadPayload, LeadTransport};

// =============================================================================
// Relay Transport
// =============================================================================

/// Lead transport backed by the browser Fetch API.
#[derive(Clone, Debug)]
pub struct FormRelay {
    endpoint: String,
}

impl FormRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for FormRelay {
    fn default() -> Self {
        Self::new(LEAD_ENDPOINT)
    }
}

impl LeadTransport for FormRelay {
    async fn send(&self, payload: &LeadPayload) -> Result<(), SubmissionError> {
        let request = Request::post(&self.endpoint)
            .header("Accept", "application/json")
            .json(payload)
            .map_err(|e| SubmissionError::Encode(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| SubmissionError::Network(e.to_string()))?;

        check_status(response.status())?;

        // The relay answers with a small JSON receipt; its content is unused.
        response
            .json::<serde_json::Value>()
            .await
            .map(|_| ())
            .map_err(|_| SubmissionError::InvalidBody)
    }
}

// =============================================================================
// Response Classification
// =============================================================================

/// Only 2xx statuses count as delivered.
fn check_status(status: u16) -> Result<(), SubmissionError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmissionError::Status(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_status() {
        assert_eq!(check_status(200), Ok(()));
        assert_eq!(check_status(204), Ok(()));
        assert_eq!(check_status(299), Ok(()));
        assert_eq!(check_status(199), Err(SubmissionError::Status(199)));
        assert_eq!(check_status(302), Err(SubmissionError::Status(302)));
        assert_eq!(check_status(422), Err(SubmissionError::Status(422)));
        assert_eq!(check_status(503), Err(SubmissionError::Status(503)));
    }

    #[test]
    fn test_default_endpoint() {
        assert_eq!(FormRelay::default().endpoint(), LEAD_ENDPOINT);
    }
}
