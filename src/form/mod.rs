//! UI-independent form core.
//!
//! - `auth` / `registration` - field stores, option enums and rule tables
//! - `rules` - the shared rule-table validator
//! - `error_map` - per-field messages produced by validation
//! - `skills` - case-insensitive tag list and its draft editor
//! - `submission` - the idle/submitting gate with guaranteed release

pub mod auth;
pub mod error_map;
pub mod registration;
pub mod rules;
pub mod skills;
pub mod submission;

pub use auth::{AuthField, AuthFields, AuthForm, AuthMode};
pub use error_map::ErrorMap;
pub use registration::{
    sanitize_digits, Experience, NoticePeriod, RegistrationField, RegistrationFields,
    RegistrationForm, RegistrationUpdate,
};
pub use skills::{AddOutcome, SkillEditor, SkillList, TagEdit, TagKey};
pub use submission::{
    Refusal, SubmissionController, SubmissionState, SubmissionTicket, SubmitOutcome,
};
