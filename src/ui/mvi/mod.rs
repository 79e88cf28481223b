//! Model-View-Intent primitives shared by the form screens.
//!
//! ```text
//! key press ──→ Intent ──→ Reducer ──→ State ──→ render
//!                  ↑                              │
//!                  └──── submission events ───────┘
//! ```
//!
//! - **State**: everything a screen needs to render
//! - **Intent**: user input or a submission result
//! - **Reducer**: pure `(State, Intent) -> State`; side effects (spawning the
//!   service call) stay in `App`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
