//! Reducer trait for screen state transitions.

use super::intent::Intent;
use super::state::UiState;

/// The only place where screen state changes.
///
/// `reduce` must stay pure: validation runs here because it is a pure
/// function of the state, but service calls and filesystem access do not.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
