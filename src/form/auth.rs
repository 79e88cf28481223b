//! Sign-in / sign-up form: field store, modes and rules.

use std::sync::LazyLock;

use super::error_map::ErrorMap;
use super::rules::{equals, min_chars, required, RuleSet};

pub const USERNAME_MIN_CHARS: usize = 3;
pub const PASSWORD_MIN_CHARS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Welcome back",
            AuthMode::SignUp => "Create your account",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign in to continue",
            AuthMode::SignUp => "Sign up to get started",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign in",
            AuthMode::SignUp => "Sign up",
        }
    }

    /// Label of the control that switches to the other mode.
    pub fn switch_label(self) -> &'static str {
        match self {
            AuthMode::SignIn => "New here? Create an account",
            AuthMode::SignUp => "Already have an account? Sign in",
        }
    }

    pub fn success_message(self, username: &str) -> String {
        match self {
            AuthMode::SignIn => format!("Signed in as {}", username),
            AuthMode::SignUp => format!("Account created for {}", username),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AuthField {
    Username,
    Password,
    ConfirmPassword,
}

impl AuthField {
    pub fn label(self) -> &'static str {
        match self {
            AuthField::Username => "Username",
            AuthField::Password => "Password",
            AuthField::ConfirmPassword => "Confirm password",
        }
    }

    pub fn is_secret(self) -> bool {
        matches!(self, AuthField::Password | AuthField::ConfirmPassword)
    }

    /// Fields shown in `mode`, top to bottom.
    pub fn visible(mode: AuthMode) -> &'static [AuthField] {
        match mode {
            AuthMode::SignIn => &[AuthField::Username, AuthField::Password],
            AuthMode::SignUp => &[
                AuthField::Username,
                AuthField::Password,
                AuthField::ConfirmPassword,
            ],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthFields {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl AuthFields {
    /// Replace one field; the others keep their values.
    pub fn set(&mut self, field: AuthField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    pub fn get(&self, field: AuthField) -> &str {
        match field {
            AuthField::Username => &self.username,
            AuthField::Password => &self.password,
            AuthField::ConfirmPassword => &self.confirm_password,
        }
    }

    pub(crate) fn slot_mut(&mut self, field: AuthField) -> &mut String {
        match field {
            AuthField::Username => &mut self.username,
            AuthField::Password => &mut self.password,
            AuthField::ConfirmPassword => &mut self.confirm_password,
        }
    }
}

/// Snapshot the validator runs against: the mode decides which rules apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub fields: AuthFields,
}

impl AuthForm {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            fields: AuthFields::default(),
        }
    }

    pub fn validate(&self) -> ErrorMap<AuthField> {
        AUTH_RULES.validate(self)
    }

    pub fn validate_field(&self, field: AuthField) -> Option<String> {
        AUTH_RULES.validate_field(self, field)
    }
}

static AUTH_RULES: LazyLock<RuleSet<AuthForm, AuthField>> = LazyLock::new(|| {
    RuleSet::new()
        .field(
            AuthField::Username,
            vec![
                required(|f: &AuthForm| f.fields.username.trim(), "Username is required."),
                min_chars(
                    |f: &AuthForm| f.fields.username.trim(),
                    USERNAME_MIN_CHARS,
                    "Username must be at least 3 characters.",
                ),
            ],
        )
        .field(
            AuthField::Password,
            vec![
                required(|f: &AuthForm| f.fields.password.as_str(), "Password is required."),
                min_chars(
                    |f: &AuthForm| f.fields.password.as_str(),
                    PASSWORD_MIN_CHARS,
                    "Password must be at least 8 characters.",
                ),
            ],
        )
        .field_if(
            AuthField::ConfirmPassword,
            |f: &AuthForm| f.mode == AuthMode::SignUp,
            vec![
                required(
                    |f: &AuthForm| f.fields.confirm_password.as_str(),
                    "Please confirm your password.",
                ),
                equals(
                    |f: &AuthForm| f.fields.confirm_password.as_str(),
                    |f: &AuthForm| f.fields.password.as_str(),
                    "Passwords do not match.",
                ),
            ],
        )
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_only_one_field() {
        let mut fields = AuthFields::default();
        fields.set(AuthField::Username, "alice");
        fields.set(AuthField::Password, "hunter22");
        fields.set(AuthField::Username, "bob");
        assert_eq!(fields.get(AuthField::Username), "bob");
        assert_eq!(fields.get(AuthField::Password), "hunter22");
        assert_eq!(fields.get(AuthField::ConfirmPassword), "");
    }

    #[test]
    fn sign_in_ignores_confirm_password() {
        let mut form = AuthForm::new(AuthMode::SignIn);
        form.fields.set(AuthField::Username, "alice");
        form.fields.set(AuthField::Password, "longenough");
        assert!(form.validate().is_empty());
    }

    #[test]
    fn mode_labels() {
        assert_eq!(AuthMode::SignIn.submit_label(), "Sign in");
        assert_eq!(AuthMode::SignUp.title(), "Create your account");
        assert_eq!(AuthMode::SignIn.toggled(), AuthMode::SignUp);
        assert_eq!(
            AuthMode::SignUp.success_message("ann"),
            "Account created for ann"
        );
    }

    #[test]
    fn visible_fields_follow_mode() {
        assert_eq!(AuthField::visible(AuthMode::SignIn).len(), 2);
        assert!(AuthField::visible(AuthMode::SignUp).contains(&AuthField::ConfirmPassword));
    }
}
