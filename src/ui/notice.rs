//! Form-level messages shown above the submit button.

use crate::backend::SubmitError;

/// Outcome banner of the last submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Failure(String),
}

impl Notice {
    pub fn from_result(result: &Result<String, SubmitError>) -> Self {
        match result {
            Ok(message) => Notice::Success(message.clone()),
            Err(err) => Notice::Failure(err.user_message()),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Notice::Success(text) | Notice::Failure(text) => text,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Notice::Success(_))
    }
}
