//! Intents for the sign-in / sign-up screen.

use crate::backend::SubmitError;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum AuthIntent {
    /// Type a character into the focused field.
    Insert(char),
    /// Delete the last character of the focused field.
    Backspace,
    FocusNext,
    FocusPrev,
    /// Switch between sign-in and sign-up. Clears errors, keeps values.
    ToggleMode,
    TogglePasswordVisibility,
    /// Validate the form. `App` starts the service call if it passes.
    Submit,
    /// The submission controller accepted the submission.
    SubmissionStarted,
    /// The service call returned. `Ok` carries the confirmation message.
    SubmissionFinished {
        result: Result<String, SubmitError>,
        /// Clear the form on success.
        reset: bool,
    },
    DismissNotice,
}

impl Intent for AuthIntent {}
