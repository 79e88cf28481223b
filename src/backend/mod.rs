//! Account and profile services the forms submit to.
//!
//! The forms only know these traits. The binary wires in
//! [`SimulatedBackend`], which waits a fixed delay and succeeds (or fails on
//! request); a real client would implement the same traits.

mod error;
mod simulated;

use std::fmt;

use async_trait::async_trait;

use crate::form::auth::AuthFields;
use crate::form::registration::{Experience, RegistrationForm};

pub use error::SubmitError;
pub use simulated::SimulatedBackend;

/// Username and password sent to the account service.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn from_fields(fields: &AuthFields) -> Self {
        Self {
            username: fields.username.trim().to_string(),
            password: fields.password.clone(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Opaque session issued after sign-in or sign-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifier of a created candidate profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileId(String);

impl ProfileId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated registration data, trimmed and with optional fields resolved.
#[derive(Clone, PartialEq, Eq)]
pub struct ProfileSubmission {
    pub full_name: String,
    pub email: String,
    pub mobile: String,
    pub password: String,
    pub experience: Experience,
    pub current_location: String,
    pub highest_qualification: String,
    /// Only kept for experienced profiles.
    pub current_role: Option<String>,
    pub notice_period: String,
    /// Expected CTC in LPA, when given.
    pub expected_ctc: Option<String>,
    pub skills: Vec<String>,
    pub resume_file_name: String,
}

impl ProfileSubmission {
    pub fn from_form(form: &RegistrationForm) -> Self {
        let fields = &form.fields;
        let non_empty = |value: &str| {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        };
        Self {
            full_name: fields.full_name.trim().to_string(),
            email: fields.email.trim().to_string(),
            mobile: fields.mobile.trim().to_string(),
            password: fields.password.clone(),
            experience: fields.experience,
            current_location: fields.current_location.trim().to_string(),
            highest_qualification: fields.highest_qualification.trim().to_string(),
            current_role: match fields.experience {
                Experience::Fresher => None,
                _ => non_empty(&fields.current_role),
            },
            notice_period: fields.notice_period.label().to_string(),
            expected_ctc: non_empty(&fields.expected_ctc),
            skills: form.skills.skills().as_slice().to_vec(),
            resume_file_name: fields.resume_file_name.clone(),
        }
    }
}

impl fmt::Debug for ProfileSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileSubmission")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("experience", &self.experience)
            .field("skills", &self.skills)
            .field("resume_file_name", &self.resume_file_name)
            .finish_non_exhaustive()
    }
}

/// Signs users in and creates accounts.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    async fn sign_in(&self, credentials: &Credentials) -> Result<SessionToken, SubmitError>;

    async fn sign_up(&self, credentials: &Credentials) -> Result<SessionToken, SubmitError>;
}

/// Stores candidate profiles.
#[async_trait]
pub trait ProfileService: Send + Sync {
    fn name(&self) -> &'static str;

    async fn create_profile(&self, profile: &ProfileSubmission) -> Result<ProfileId, SubmitError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::registration::RegistrationUpdate;

    #[test]
    fn credentials_debug_hides_password() {
        let creds = Credentials {
            username: "alice".into(),
            password: "secret-password".into(),
        };
        let rendered = format!("{:?}", creds);
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("secret-password"));
    }

    #[test]
    fn credentials_trim_username_only() {
        let fields = AuthFields {
            username: "  alice ".into(),
            password: " pass word ".into(),
            confirm_password: String::new(),
        };
        let creds = Credentials::from_fields(&fields);
        assert_eq!(creds.username, "alice");
        assert_eq!(creds.password, " pass word ");
    }

    #[test]
    fn fresher_profile_drops_current_role() {
        let mut form = RegistrationForm::default();
        form.fields.set(RegistrationUpdate::CurrentRole("Intern".into()));
        form.fields.set(RegistrationUpdate::ExpectedCtc("  ".into()));
        let profile = ProfileSubmission::from_form(&form);
        assert_eq!(profile.current_role, None);
        assert_eq!(profile.expected_ctc, None);

        form.fields.set(RegistrationUpdate::Experience(Experience::ThreeToFive));
        let profile = ProfileSubmission::from_form(&form);
        assert_eq!(profile.current_role.as_deref(), Some("Intern"));
    }
}
