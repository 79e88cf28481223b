//! Errors reported by account and profile services.

use thiserror::Error;

/// Why a submission that passed validation still failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The service could not be reached or is not accepting requests.
    #[error("Service unavailable: {reason}")]
    Unavailable { reason: String },

    /// The service refused the submitted data.
    #[error("Request rejected: {reason}")]
    Rejected { reason: String },

    /// The submission task ended without producing a result.
    #[error("Submission interrupted")]
    Interrupted,
}

impl SubmitError {
    /// Short message for the form-level banner.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Unavailable { reason } => {
                format!("Could not reach the service: {}", reason)
            }
            SubmitError::Rejected { reason } => reason.clone(),
            SubmitError::Interrupted => "Submission was interrupted. Please try again.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_shows_reason_verbatim() {
        let err = SubmitError::Rejected {
            reason: "Username already taken".into(),
        };
        assert_eq!(err.user_message(), "Username already taken");
        assert_eq!(err.to_string(), "Request rejected: Username already taken");
    }

    #[test]
    fn unavailable_mentions_service() {
        let err = SubmitError::Unavailable {
            reason: "timeout".into(),
        };
        assert!(err.user_message().contains("timeout"));
    }
}
