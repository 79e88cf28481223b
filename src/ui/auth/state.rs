//! State for the sign-in / sign-up screen.

use crate::form::{AuthField, AuthForm, AuthMode, ErrorMap};
use crate::ui::mvi::UiState;
use crate::ui::notice::Notice;

/// Focusable elements, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFocus {
    Field(AuthField),
    Submit,
    /// The "New here? / Already have an account?" control.
    SwitchMode,
}

impl Default for AuthFocus {
    fn default() -> Self {
        AuthFocus::Field(AuthField::Username)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthScreenState {
    pub form: AuthForm,
    pub errors: ErrorMap<AuthField>,
    pub focus: AuthFocus,
    pub show_password: bool,
    /// Mirrors the submission controller; disables the submit control.
    pub submitting: bool,
    /// Set by the first submit; from then on edits revalidate their field.
    pub attempted: bool,
    pub notice: Option<Notice>,
}

impl UiState for AuthScreenState {}

impl AuthScreenState {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            form: AuthForm::new(mode),
            ..Self::default()
        }
    }

    pub fn mode(&self) -> AuthMode {
        self.form.mode
    }

    pub fn focus_order(&self) -> Vec<AuthFocus> {
        AuthField::visible(self.mode())
            .iter()
            .copied()
            .map(AuthFocus::Field)
            .chain([AuthFocus::Submit, AuthFocus::SwitchMode])
            .collect()
    }

    pub fn focused_field(&self) -> Option<AuthField> {
        match self.focus {
            AuthFocus::Field(field) => Some(field),
            _ => None,
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            "Please wait..."
        } else {
            self.mode().submit_label()
        }
    }
}
