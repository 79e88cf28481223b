//! State for the candidate registration screen.

use crate::form::{ErrorMap, RegistrationField, RegistrationForm};
use crate::ui::mvi::UiState;
use crate::ui::notice::Notice;

/// Focusable elements, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationFocus {
    Field(RegistrationField),
    Submit,
    /// "Already have an account? Sign in"
    SignInLink,
}

impl Default for RegistrationFocus {
    fn default() -> Self {
        RegistrationFocus::Field(RegistrationField::FullName)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegistrationScreenState {
    pub form: RegistrationForm,
    pub errors: ErrorMap<RegistrationField>,
    pub focus: RegistrationFocus,
    pub show_password: bool,
    pub submitting: bool,
    pub attempted: bool,
    pub notice: Option<Notice>,
    /// Path typed into the resume picker; resolved by `App` on Enter.
    pub resume_draft: String,
    /// Highlighted skill tag, if the user is browsing tags.
    pub skill_cursor: Option<usize>,
}

impl UiState for RegistrationScreenState {}

impl RegistrationScreenState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus_order(&self) -> Vec<RegistrationFocus> {
        RegistrationField::ALL
            .iter()
            .copied()
            .map(RegistrationFocus::Field)
            .chain([RegistrationFocus::Submit, RegistrationFocus::SignInLink])
            .collect()
    }

    pub fn focused_field(&self) -> Option<RegistrationField> {
        match self.focus {
            RegistrationFocus::Field(field) => Some(field),
            _ => None,
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            "Creating profile..."
        } else {
            "Create profile"
        }
    }

    pub fn selected_skill(&self) -> Option<&str> {
        let index = self.skill_cursor?;
        self.form.skills.skills().as_slice().get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_order_ends_with_controls() {
        let order = RegistrationScreenState::new().focus_order();
        assert_eq!(order.len(), RegistrationField::ALL.len() + 2);
        assert_eq!(order.first(), Some(&RegistrationFocus::default()));
        assert_eq!(
            &order[order.len() - 2..],
            &[RegistrationFocus::Submit, RegistrationFocus::SignInLink]
        );
    }

    #[test]
    fn submit_label_while_submitting() {
        let mut state = RegistrationScreenState::new();
        assert_eq!(state.submit_label(), "Create profile");
        state.submitting = true;
        assert_eq!(state.submit_label(), "Creating profile...");
    }
}
