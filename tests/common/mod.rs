//! Shared test utilities and mock services.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use portal_forms::form::{
    Experience, RegistrationForm, RegistrationUpdate,
};
use std::path::PathBuf;
use tempfile::TempDir;

pub use mock_backend::{PanickingService, RejectingService};

/// Write `content` to a `config.toml` inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// A registration form that passes every rule.
pub fn valid_registration() -> RegistrationForm {
    let mut form = RegistrationForm::new();
    for update in [
        RegistrationUpdate::FullName("Asha Rao".into()),
        RegistrationUpdate::Email("asha@example.com".into()),
        RegistrationUpdate::Mobile("98765 43210".into()),
        RegistrationUpdate::Password("correct-horse".into()),
        RegistrationUpdate::ConfirmPassword("correct-horse".into()),
        RegistrationUpdate::Experience(Experience::ThreeToFive),
        RegistrationUpdate::CurrentLocation("Pune".into()),
        RegistrationUpdate::HighestQualification("B.Tech".into()),
        RegistrationUpdate::CurrentRole("Developer".into()),
        RegistrationUpdate::ExpectedCtc("12.5".into()),
        RegistrationUpdate::ResumeFileName("asha.pdf".into()),
        RegistrationUpdate::Consent(true),
    ] {
        form.fields.set(update);
    }
    form.skills.set_draft("Rust");
    form.skills.commit_draft();
    form
}
