//! Candidate registration form: field store, option enums and rules.

use std::sync::LazyLock;

use regex::Regex;

use super::error_map::ErrorMap;
use super::rules::{equals, matches, min_chars, required, satisfies, when, RuleSet};
use super::skills::SkillEditor;

pub const MOBILE_DIGITS: usize = 10;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));
static MOBILE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("valid mobile pattern"));
static CTC_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d+)?$").expect("valid ctc pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Experience {
    #[default]
    Fresher,
    OneToThree,
    ThreeToFive,
    FiveToEight,
    EightPlus,
}

impl Experience {
    pub const ALL: [Experience; 5] = [
        Experience::Fresher,
        Experience::OneToThree,
        Experience::ThreeToFive,
        Experience::FiveToEight,
        Experience::EightPlus,
    ];

    /// Stored value, as submitted to the profile service.
    pub fn value(self) -> &'static str {
        match self {
            Experience::Fresher => "Fresher",
            Experience::OneToThree => "1-3",
            Experience::ThreeToFive => "3-5",
            Experience::FiveToEight => "5-8",
            Experience::EightPlus => "8+",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Experience::Fresher => "Fresher",
            Experience::OneToThree => "1-3 years",
            Experience::ThreeToFive => "3-5 years",
            Experience::FiveToEight => "5-8 years",
            Experience::EightPlus => "8+ years",
        }
    }

    pub fn cycle(self, forward: bool) -> Self {
        cycle(&Self::ALL, self, forward)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticePeriod {
    #[default]
    Immediate,
    FifteenDays,
    ThirtyDays,
    SixtyDays,
    NinetyDaysPlus,
}

impl NoticePeriod {
    pub const ALL: [NoticePeriod; 5] = [
        NoticePeriod::Immediate,
        NoticePeriod::FifteenDays,
        NoticePeriod::ThirtyDays,
        NoticePeriod::SixtyDays,
        NoticePeriod::NinetyDaysPlus,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NoticePeriod::Immediate => "Immediate",
            NoticePeriod::FifteenDays => "15 days",
            NoticePeriod::ThirtyDays => "30 days",
            NoticePeriod::SixtyDays => "60 days",
            NoticePeriod::NinetyDaysPlus => "90 days+",
        }
    }

    pub fn cycle(self, forward: bool) -> Self {
        cycle(&Self::ALL, self, forward)
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T, forward: bool) -> T {
    let len = all.len();
    let index = all.iter().position(|v| *v == current).unwrap_or(0);
    let next = if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    };
    all[next]
}

/// Every key the registration form can report an error for, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegistrationField {
    FullName,
    Email,
    Mobile,
    Experience,
    Password,
    ConfirmPassword,
    CurrentLocation,
    HighestQualification,
    CurrentRole,
    NoticePeriod,
    ExpectedCtc,
    Resume,
    Skills,
    Consent,
}

impl RegistrationField {
    pub const ALL: [RegistrationField; 14] = [
        RegistrationField::FullName,
        RegistrationField::Email,
        RegistrationField::Mobile,
        RegistrationField::Experience,
        RegistrationField::Password,
        RegistrationField::ConfirmPassword,
        RegistrationField::CurrentLocation,
        RegistrationField::HighestQualification,
        RegistrationField::CurrentRole,
        RegistrationField::NoticePeriod,
        RegistrationField::ExpectedCtc,
        RegistrationField::Resume,
        RegistrationField::Skills,
        RegistrationField::Consent,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RegistrationField::FullName => "Full name",
            RegistrationField::Email => "Email",
            RegistrationField::Mobile => "Mobile (10 digits)",
            RegistrationField::Experience => "Experience",
            RegistrationField::Password => "Password",
            RegistrationField::ConfirmPassword => "Confirm password",
            RegistrationField::CurrentLocation => "Current location",
            RegistrationField::HighestQualification => "Highest qualification",
            RegistrationField::CurrentRole => "Current role (if experienced)",
            RegistrationField::NoticePeriod => "Notice period",
            RegistrationField::ExpectedCtc => "Expected CTC (LPA, optional)",
            RegistrationField::Resume => "Resume",
            RegistrationField::Skills => "Skills",
            RegistrationField::Consent => "Consent",
        }
    }

    /// Free-text fields edited character by character.
    pub fn is_text(self) -> bool {
        matches!(
            self,
            RegistrationField::FullName
                | RegistrationField::Email
                | RegistrationField::Mobile
                | RegistrationField::Password
                | RegistrationField::ConfirmPassword
                | RegistrationField::CurrentLocation
                | RegistrationField::HighestQualification
                | RegistrationField::CurrentRole
                | RegistrationField::ExpectedCtc
        )
    }

    pub fn is_secret(self) -> bool {
        matches!(
            self,
            RegistrationField::Password | RegistrationField::ConfirmPassword
        )
    }

    /// Other fields whose result depends on this field's value.
    pub fn dependents(self) -> &'static [RegistrationField] {
        match self {
            RegistrationField::Experience => &[RegistrationField::CurrentRole],
            RegistrationField::Password => &[RegistrationField::ConfirmPassword],
            _ => &[],
        }
    }
}

/// A single typed field assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationUpdate {
    FullName(String),
    Email(String),
    Mobile(String),
    Password(String),
    ConfirmPassword(String),
    Experience(Experience),
    CurrentLocation(String),
    HighestQualification(String),
    CurrentRole(String),
    NoticePeriod(NoticePeriod),
    ExpectedCtc(String),
    ResumeFileName(String),
    Consent(bool),
}

impl RegistrationUpdate {
    /// Build the update for a free-text field. `None` for non-text fields.
    pub fn text(field: RegistrationField, value: String) -> Option<Self> {
        let update = match field {
            RegistrationField::FullName => Self::FullName(value),
            RegistrationField::Email => Self::Email(value),
            RegistrationField::Mobile => Self::Mobile(value),
            RegistrationField::Password => Self::Password(value),
            RegistrationField::ConfirmPassword => Self::ConfirmPassword(value),
            RegistrationField::CurrentLocation => Self::CurrentLocation(value),
            RegistrationField::HighestQualification => Self::HighestQualification(value),
            RegistrationField::CurrentRole => Self::CurrentRole(value),
            RegistrationField::ExpectedCtc => Self::ExpectedCtc(value),
            _ => return None,
        };
        Some(update)
    }

    pub fn field(&self) -> RegistrationField {
        match self {
            Self::FullName(_) => RegistrationField::FullName,
            Self::Email(_) => RegistrationField::Email,
            Self::Mobile(_) => RegistrationField::Mobile,
            Self::Password(_) => RegistrationField::Password,
            Self::ConfirmPassword(_) => RegistrationField::ConfirmPassword,
            Self::Experience(_) => RegistrationField::Experience,
            Self::CurrentLocation(_) => RegistrationField::CurrentLocation,
            Self::HighestQualification(_) => RegistrationField::HighestQualification,
            Self::CurrentRole(_) => RegistrationField::CurrentRole,
            Self::NoticePeriod(_) => RegistrationField::NoticePeriod,
            Self::ExpectedCtc(_) => RegistrationField::ExpectedCtc,
            Self::ResumeFileName(_) => RegistrationField::Resume,
            Self::Consent(_) => RegistrationField::Consent,
        }
    }
}

/// Strip everything but ASCII digits.
pub fn sanitize_digits(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationFields {
    pub full_name: String,
    pub email: String,
    pub mobile: String,
    pub password: String,
    pub confirm_password: String,
    pub experience: Experience,
    pub current_location: String,
    pub highest_qualification: String,
    pub current_role: String,
    pub notice_period: NoticePeriod,
    pub expected_ctc: String,
    pub resume_file_name: String,
    pub consent: bool,
}

impl RegistrationFields {
    /// Apply one update; every other field keeps its value. Mobile input is
    /// reduced to its digits here, at the input boundary.
    pub fn set(&mut self, update: RegistrationUpdate) {
        match update {
            RegistrationUpdate::FullName(v) => self.full_name = v,
            RegistrationUpdate::Email(v) => self.email = v,
            RegistrationUpdate::Mobile(v) => self.mobile = sanitize_digits(&v),
            RegistrationUpdate::Password(v) => self.password = v,
            RegistrationUpdate::ConfirmPassword(v) => self.confirm_password = v,
            RegistrationUpdate::Experience(v) => self.experience = v,
            RegistrationUpdate::CurrentLocation(v) => self.current_location = v,
            RegistrationUpdate::HighestQualification(v) => self.highest_qualification = v,
            RegistrationUpdate::CurrentRole(v) => self.current_role = v,
            RegistrationUpdate::NoticePeriod(v) => self.notice_period = v,
            RegistrationUpdate::ExpectedCtc(v) => self.expected_ctc = v,
            RegistrationUpdate::ResumeFileName(v) => self.resume_file_name = v,
            RegistrationUpdate::Consent(v) => self.consent = v,
        }
    }

    /// Current value of a free-text field.
    pub fn text(&self, field: RegistrationField) -> Option<&str> {
        let value = match field {
            RegistrationField::FullName => &self.full_name,
            RegistrationField::Email => &self.email,
            RegistrationField::Mobile => &self.mobile,
            RegistrationField::Password => &self.password,
            RegistrationField::ConfirmPassword => &self.confirm_password,
            RegistrationField::CurrentLocation => &self.current_location,
            RegistrationField::HighestQualification => &self.highest_qualification,
            RegistrationField::CurrentRole => &self.current_role,
            RegistrationField::ExpectedCtc => &self.expected_ctc,
            _ => return None,
        };
        Some(value)
    }
}

/// Snapshot the validator runs against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub fields: RegistrationFields,
    pub skills: SkillEditor,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> ErrorMap<RegistrationField> {
        REGISTRATION_RULES.validate(self)
    }

    pub fn validate_field(&self, field: RegistrationField) -> Option<String> {
        REGISTRATION_RULES.validate_field(self, field)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

static REGISTRATION_RULES: LazyLock<RuleSet<RegistrationForm, RegistrationField>> =
    LazyLock::new(|| {
        RuleSet::new()
            .field(
                RegistrationField::FullName,
                vec![required(
                    |r: &RegistrationForm| r.fields.full_name.trim(),
                    "Full name is required.",
                )],
            )
            .field(
                RegistrationField::Email,
                vec![
                    required(|r: &RegistrationForm| r.fields.email.trim(), "Email is required."),
                    matches(
                        |r: &RegistrationForm| r.fields.email.trim(),
                        &EMAIL_PATTERN,
                        "Enter a valid email address.",
                    ),
                ],
            )
            .field(
                RegistrationField::Mobile,
                vec![
                    required(
                        |r: &RegistrationForm| r.fields.mobile.trim(),
                        "Mobile number is required.",
                    ),
                    matches(
                        |r: &RegistrationForm| r.fields.mobile.trim(),
                        &MOBILE_PATTERN,
                        "Enter a valid 10-digit mobile number.",
                    ),
                ],
            )
            .field(
                RegistrationField::Password,
                vec![
                    required(
                        |r: &RegistrationForm| r.fields.password.as_str(),
                        "Password is required.",
                    ),
                    min_chars(
                        |r: &RegistrationForm| r.fields.password.as_str(),
                        super::auth::PASSWORD_MIN_CHARS,
                        "Password must be at least 8 characters.",
                    ),
                ],
            )
            .field(
                RegistrationField::ConfirmPassword,
                vec![
                    required(
                        |r: &RegistrationForm| r.fields.confirm_password.as_str(),
                        "Please confirm your password.",
                    ),
                    equals(
                        |r: &RegistrationForm| r.fields.confirm_password.as_str(),
                        |r: &RegistrationForm| r.fields.password.as_str(),
                        "Passwords do not match.",
                    ),
                ],
            )
            .field(
                RegistrationField::CurrentLocation,
                vec![required(
                    |r: &RegistrationForm| r.fields.current_location.trim(),
                    "Current location is required.",
                )],
            )
            .field(
                RegistrationField::HighestQualification,
                vec![required(
                    |r: &RegistrationForm| r.fields.highest_qualification.trim(),
                    "Highest qualification is required.",
                )],
            )
            .field_if(
                RegistrationField::CurrentRole,
                |r: &RegistrationForm| r.fields.experience != Experience::Fresher,
                vec![required(
                    |r: &RegistrationForm| r.fields.current_role.trim(),
                    "Current role is required for experienced profiles.",
                )],
            )
            .field(
                RegistrationField::ExpectedCtc,
                vec![when(
                    |r: &RegistrationForm| !r.fields.expected_ctc.trim().is_empty(),
                    matches(
                        |r: &RegistrationForm| r.fields.expected_ctc.trim(),
                        &CTC_PATTERN,
                        "Expected CTC must be a number (example: 8 or 8.5).",
                    ),
                )],
            )
            .field(
                RegistrationField::Skills,
                vec![satisfies(
                    |r: &RegistrationForm| !r.skills.skills().is_empty(),
                    "Add at least one skill.",
                )],
            )
            .field(
                RegistrationField::Resume,
                vec![required(
                    |r: &RegistrationForm| r.fields.resume_file_name.as_str(),
                    "Please upload your resume.",
                )],
            )
            .field(
                RegistrationField::Consent,
                vec![satisfies(
                    |r: &RegistrationForm| r.fields.consent,
                    "You must accept the terms to continue.",
                )],
            )
    });

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_cycle_both_ways() {
        assert_eq!(Experience::Fresher.cycle(true), Experience::OneToThree);
        assert_eq!(Experience::Fresher.cycle(false), Experience::EightPlus);
        assert_eq!(NoticePeriod::NinetyDaysPlus.cycle(true), NoticePeriod::Immediate);
    }

    #[test]
    fn text_update_only_for_text_fields() {
        assert!(RegistrationUpdate::text(RegistrationField::Consent, "x".into()).is_none());
        let update = RegistrationUpdate::text(RegistrationField::Email, "a@b.co".into());
        assert_eq!(update.map(|u| u.field()), Some(RegistrationField::Email));
    }

    #[test]
    fn sanitize_keeps_only_digits() {
        assert_eq!(sanitize_digits("+91 (98) 76-54"), "91987654");
    }

    #[test]
    fn experience_values_match_option_keys() {
        let values: Vec<&str> = Experience::ALL.iter().map(|e| e.value()).collect();
        assert_eq!(values, ["Fresher", "1-3", "3-5", "5-8", "8+"]);
    }

    #[test]
    fn text_fields_round_trip_through_store() {
        let mut fields = RegistrationFields::default();
        for field in RegistrationField::ALL.iter().copied().filter(|f| f.is_text()) {
            let update = RegistrationUpdate::text(field, "7".to_string()).unwrap();
            fields.set(update);
            assert_eq!(fields.text(field), Some("7"));
        }
    }
}
