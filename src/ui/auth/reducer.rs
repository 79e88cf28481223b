use tracing::debug;

use crate::form::{AuthField, AuthFields, AuthMode};
use crate::ui::auth::intent::AuthIntent;
use crate::ui::auth::state::{AuthFocus, AuthScreenState};
use crate::ui::mvi::Reducer;
use crate::ui::notice::Notice;

pub struct AuthReducer;

impl Reducer for AuthReducer {
    type State = AuthScreenState;
    type Intent = AuthIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AuthIntent::Insert(ch) => {
                if let Some(field) = state.focused_field() {
                    state.form.fields.slot_mut(field).push(ch);
                    revalidate(&mut state, field);
                }
                state
            }
            AuthIntent::Backspace => {
                if let Some(field) = state.focused_field() {
                    state.form.fields.slot_mut(field).pop();
                    revalidate(&mut state, field);
                }
                state
            }
            AuthIntent::FocusNext => move_focus(state, 1),
            AuthIntent::FocusPrev => move_focus(state, -1),
            AuthIntent::ToggleMode => {
                let mode = state.mode().toggled();
                debug!(?mode, "Auth mode toggled");
                state.form.mode = mode;
                state.errors.clear();
                state.attempted = false;
                state.notice = None;
                if mode == AuthMode::SignIn
                    && state.focus == AuthFocus::Field(AuthField::ConfirmPassword)
                {
                    state.focus = AuthFocus::Field(AuthField::Password);
                }
                state
            }
            AuthIntent::TogglePasswordVisibility => {
                state.show_password = !state.show_password;
                state
            }
            AuthIntent::Submit => {
                if state.submitting {
                    // Control is disabled while a submission is in flight.
                    return state;
                }
                state.errors = state.form.validate();
                state.attempted = true;
                state.notice = None;
                debug!(errors = state.errors.len(), "Auth form validated");
                state
            }
            AuthIntent::SubmissionStarted => {
                state.submitting = true;
                state
            }
            AuthIntent::SubmissionFinished { result, reset } => {
                state.submitting = false;
                state.notice = Some(Notice::from_result(&result));
                if result.is_ok() && reset {
                    state.form.fields = AuthFields::default();
                    state.errors.clear();
                    state.attempted = false;
                    state.focus = AuthFocus::default();
                }
                state
            }
            AuthIntent::DismissNotice => {
                state.notice = None;
                state
            }
        }
    }
}

/// Refresh the edited field (and the confirmation it feeds) once a submit
/// attempt has surfaced errors.
fn revalidate(state: &mut AuthScreenState, field: AuthField) {
    if !state.attempted {
        return;
    }
    let dependents: &[AuthField] = match field {
        AuthField::Password => &[AuthField::ConfirmPassword],
        _ => &[],
    };
    for field in std::iter::once(field).chain(dependents.iter().copied()) {
        let message = state.form.validate_field(field);
        state.errors.update(field, message);
    }
}

fn move_focus(mut state: AuthScreenState, step: isize) -> AuthScreenState {
    let order = state.focus_order();
    let len = order.len() as isize;
    let current = order.iter().position(|f| *f == state.focus).unwrap_or(0) as isize;
    let next = (current + step).rem_euclid(len) as usize;
    state.focus = order[next];
    state
}
