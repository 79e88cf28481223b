//! Sign-in / sign-up screen.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - screen state (form, errors, focus, submission flag)
//! - `intent.rs` - user/system actions
//! - `reducer.rs` - state transitions and validation
//! - `view.rs` - rendering

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::AuthIntent;
pub use reducer::AuthReducer;
pub use state::{AuthFocus, AuthScreenState};
pub use view::render_auth;
