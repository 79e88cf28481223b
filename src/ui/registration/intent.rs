//! Intents for the registration screen.

use crate::backend::SubmitError;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum RegistrationIntent {
    /// Type into the focused text field, skill draft or resume path.
    Insert(char),
    Backspace,
    FocusNext,
    FocusPrev,
    /// Step the focused select (experience or notice period).
    CycleOption { forward: bool },
    ToggleConsent,
    TogglePasswordVisibility,
    /// Commit the skill draft (Enter on the skills input).
    CommitSkill,
    /// Move the highlight across the skill tags.
    SelectSkill { forward: bool },
    RemoveSelectedSkill,
    /// `App` resolved the typed resume path. `None` clears the choice.
    ResumeChosen { file_name: Option<String> },
    Submit,
    SubmissionStarted,
    SubmissionFinished {
        result: Result<String, SubmitError>,
        reset: bool,
    },
    DismissNotice,
}

impl Intent for RegistrationIntent {}
