//! Candidate registration screen.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - screen state (form, skills, errors, focus)
//! - `intent.rs` - user/system actions
//! - `reducer.rs` - state transitions and validation
//! - `view.rs` - rendering

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::RegistrationIntent;
pub use reducer::RegistrationReducer;
pub use state::{RegistrationFocus, RegistrationScreenState};
pub use view::render_registration;
