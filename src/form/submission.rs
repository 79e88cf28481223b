//! Submission state machine shared by both forms.
//!
//! ```text
//!            begin (no errors)
//!   Idle ─────────────────────────→ Submitting
//!    ↑                                  │
//!    └──── ticket dropped (any exit) ───┘
//! ```
//!
//! A form may only enter `Submitting` through [`SubmissionController::begin`],
//! which hands out a [`SubmissionTicket`]. Dropping the ticket is the only way
//! back to `Idle`, so the flag is released on success, on error, on panic and
//! when the owning future is dropped.

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use parking_lot::Mutex;
use scopeguard::ScopeGuard;
use tracing::debug;

use crate::backend::SubmitError;

use super::error_map::ErrorMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting {
        since: Instant,
    },
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting { .. })
    }
}

/// Why [`SubmissionController::begin`] refused to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refusal {
    /// The validator reported at least one error.
    Invalid,
    /// A submission is already in flight.
    Busy,
}

/// Result of a full [`SubmissionController::submit`] round.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<K: Ord, T> {
    /// Validation failed; nothing was sent.
    Rejected(ErrorMap<K>),
    /// Another submission was still running.
    Busy,
    /// The work unit ran to completion.
    Completed(Result<T, SubmitError>),
}

type SharedState = Arc<Mutex<SubmissionState>>;

fn release(state: SharedState) {
    let mut guard = state.lock();
    if let SubmissionState::Submitting { since } = *guard {
        debug!(elapsed_ms = since.elapsed().as_millis() as u64, "Submission released");
    }
    *guard = SubmissionState::Idle;
}

/// Proof that this caller owns the `Submitting` state.
#[must_use = "dropping the ticket immediately ends the submission"]
pub struct SubmissionTicket {
    _guard: ScopeGuard<SharedState, fn(SharedState)>,
}

impl SubmissionTicket {
    /// Await `work` while holding the ticket, then release it.
    pub async fn run<T, Fut>(self, work: Fut) -> Result<T, SubmitError>
    where
        Fut: Future<Output = Result<T, SubmitError>>,
    {
        let _ticket = self;
        work.await
    }
}

/// Per-form gate between `Idle` and `Submitting`.
///
/// Clones share state, so a spawned task can hold the ticket while the UI
/// thread polls [`SubmissionController::is_submitting`].
#[derive(Debug, Clone, Default)]
pub struct SubmissionController {
    state: SharedState,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmissionState {
        *self.state.lock()
    }

    pub fn is_submitting(&self) -> bool {
        self.state().is_submitting()
    }

    /// Enter `Submitting` if the form is valid and nothing is in flight.
    pub fn begin<K: Ord + Copy>(
        &self,
        errors: &ErrorMap<K>,
    ) -> Result<SubmissionTicket, Refusal> {
        let mut state = self.state.lock();
        if state.is_submitting() {
            debug!("Submission refused: already submitting");
            return Err(Refusal::Busy);
        }
        if !errors.is_empty() {
            debug!(errors = errors.len(), "Submission refused: validation failed");
            return Err(Refusal::Invalid);
        }
        *state = SubmissionState::Submitting {
            since: Instant::now(),
        };
        drop(state);

        debug!("Submission started");
        Ok(SubmissionTicket {
            _guard: scopeguard::guard(Arc::clone(&self.state), release as fn(SharedState)),
        })
    }

    /// Validate-gated submit: refuse, or run `work` as the single in-flight
    /// submission and return to `Idle` afterwards.
    pub async fn submit<K, T, Fut>(&self, errors: ErrorMap<K>, work: Fut) -> SubmitOutcome<K, T>
    where
        K: Ord + Copy,
        Fut: Future<Output = Result<T, SubmitError>>,
    {
        match self.begin(&errors) {
            Ok(ticket) => SubmitOutcome::Completed(ticket.run(work).await),
            Err(Refusal::Busy) => SubmitOutcome::Busy,
            Err(Refusal::Invalid) => SubmitOutcome::Rejected(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Key {
        Name,
    }

    #[test]
    fn ticket_drop_returns_to_idle() {
        let controller = SubmissionController::new();
        let ticket = controller.begin(&ErrorMap::<Key>::new()).unwrap();
        assert!(controller.is_submitting());
        drop(ticket);
        assert_eq!(controller.state(), SubmissionState::Idle);
    }

    #[test]
    fn second_begin_is_busy() {
        let controller = SubmissionController::new();
        let _ticket = controller.begin(&ErrorMap::<Key>::new()).unwrap();
        let clone = controller.clone();
        assert_eq!(
            clone.begin(&ErrorMap::<Key>::new()).err(),
            Some(Refusal::Busy)
        );
    }

    #[test]
    fn errors_keep_controller_idle() {
        let controller = SubmissionController::new();
        let mut errors = ErrorMap::new();
        errors.insert(Key::Name, "required");
        assert_eq!(controller.begin(&errors).err(), Some(Refusal::Invalid));
        assert!(!controller.is_submitting());
    }
}
