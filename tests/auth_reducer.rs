use portal_forms::backend::SubmitError;
use portal_forms::form::{AuthField, AuthMode};
use portal_forms::ui::auth::{AuthFocus, AuthIntent, AuthReducer, AuthScreenState};
use portal_forms::ui::mvi::Reducer;
use portal_forms::ui::notice::Notice;

fn reduce_all(state: AuthScreenState, intents: Vec<AuthIntent>) -> AuthScreenState {
    intents.into_iter().fold(state, AuthReducer::reduce)
}

fn type_text(state: AuthScreenState, text: &str) -> AuthScreenState {
    reduce_all(state, text.chars().map(AuthIntent::Insert).collect())
}

#[test]
fn typing_fills_focused_field() {
    let state = type_text(AuthScreenState::default(), "alice");
    let state = AuthReducer::reduce(state, AuthIntent::FocusNext);
    let state = type_text(state, "password1");
    let state = AuthReducer::reduce(state, AuthIntent::Backspace);

    assert_eq!(state.form.fields.username, "alice");
    assert_eq!(state.form.fields.password, "password");
}

#[test]
fn submit_with_short_values_shows_two_errors() {
    let state = type_text(AuthScreenState::default(), "ab");
    let state = AuthReducer::reduce(state, AuthIntent::FocusNext);
    let state = type_text(state, "short");
    let state = AuthReducer::reduce(state, AuthIntent::Submit);

    assert!(state.attempted);
    assert_eq!(state.errors.len(), 2);
    assert!(!state.submitting);
}

#[test]
fn no_errors_before_first_submit() {
    let state = type_text(AuthScreenState::default(), "a");
    assert!(state.errors.is_empty());
}

#[test]
fn edits_after_submit_revalidate_the_field() {
    let state = AuthReducer::reduce(AuthScreenState::default(), AuthIntent::Submit);
    assert_eq!(
        state.errors.get(AuthField::Username),
        Some("Username is required.")
    );

    let state = type_text(state, "ab");
    assert_eq!(
        state.errors.get(AuthField::Username),
        Some("Username must be at least 3 characters.")
    );
    let state = type_text(state, "c");
    assert!(!state.errors.contains(AuthField::Username));
    assert!(state.errors.contains(AuthField::Password));
}

#[test]
fn editing_password_refreshes_confirmation() {
    let mut state = AuthScreenState::new(AuthMode::SignUp);
    state.form.fields.set(AuthField::Username, "alice");
    state.form.fields.set(AuthField::Password, "password");
    state.form.fields.set(AuthField::ConfirmPassword, "password1");
    let state = AuthReducer::reduce(state, AuthIntent::Submit);
    assert_eq!(
        state.errors.get(AuthField::ConfirmPassword),
        Some("Passwords do not match.")
    );

    let mut state = state;
    state.focus = AuthFocus::Field(AuthField::Password);
    let state = type_text(state, "1");
    assert!(state.errors.is_empty());
}

#[test]
fn toggle_mode_clears_errors_and_keeps_values() {
    let mut state = AuthScreenState::new(AuthMode::SignUp);
    state.form.fields.set(AuthField::Username, "alice");
    state.focus = AuthFocus::Field(AuthField::ConfirmPassword);
    let state = AuthReducer::reduce(state, AuthIntent::Submit);
    assert!(!state.errors.is_empty());

    let state = AuthReducer::reduce(state, AuthIntent::ToggleMode);
    assert_eq!(state.mode(), AuthMode::SignIn);
    assert!(state.errors.is_empty());
    assert!(!state.attempted);
    assert_eq!(state.form.fields.username, "alice");
    assert_eq!(state.focus, AuthFocus::Field(AuthField::Password));
}

#[test]
fn submit_ignored_while_submitting() {
    let state = AuthReducer::reduce(AuthScreenState::default(), AuthIntent::SubmissionStarted);
    let next = AuthReducer::reduce(state.clone(), AuthIntent::Submit);
    assert_eq!(next, state);
    assert_eq!(next.submit_label(), "Please wait...");
}

#[test]
fn finished_submission_shows_notice() {
    let state = AuthReducer::reduce(AuthScreenState::default(), AuthIntent::SubmissionStarted);
    let state = AuthReducer::reduce(
        state,
        AuthIntent::SubmissionFinished {
            result: Err(SubmitError::Rejected {
                reason: "Invalid username or password".into(),
            }),
            reset: true,
        },
    );
    assert!(!state.submitting);
    assert_eq!(
        state.notice,
        Some(Notice::Failure("Invalid username or password".into()))
    );

    let state = AuthReducer::reduce(state, AuthIntent::DismissNotice);
    assert!(state.notice.is_none());
}

#[test]
fn reset_on_success_clears_fields() {
    let mut state = AuthScreenState::default();
    state.form.fields.set(AuthField::Username, "alice");
    state.form.fields.set(AuthField::Password, "password1");
    state.focus = AuthFocus::Submit;

    let kept = AuthReducer::reduce(
        state.clone(),
        AuthIntent::SubmissionFinished {
            result: Ok("Signed in as alice".into()),
            reset: false,
        },
    );
    assert_eq!(kept.form.fields.username, "alice");

    let cleared = AuthReducer::reduce(
        state,
        AuthIntent::SubmissionFinished {
            result: Ok("Signed in as alice".into()),
            reset: true,
        },
    );
    assert_eq!(cleared.form.fields.username, "");
    assert_eq!(cleared.focus, AuthFocus::Field(AuthField::Username));
    assert_eq!(cleared.notice, Some(Notice::Success("Signed in as alice".into())));
}

#[test]
fn password_visibility_toggles() {
    let state = AuthReducer::reduce(
        AuthScreenState::default(),
        AuthIntent::TogglePasswordVisibility,
    );
    assert!(state.show_password);
    let state = AuthReducer::reduce(state, AuthIntent::TogglePasswordVisibility);
    assert!(!state.show_password);
}
