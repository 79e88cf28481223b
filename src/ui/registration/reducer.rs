use tracing::debug;

use crate::form::{AddOutcome, RegistrationField, RegistrationUpdate, TagEdit, TagKey};
use crate::ui::mvi::Reducer;
use crate::ui::notice::Notice;
use crate::ui::registration::intent::RegistrationIntent;
use crate::ui::registration::state::{RegistrationFocus, RegistrationScreenState};

pub struct RegistrationReducer;

impl Reducer for RegistrationReducer {
    type State = RegistrationScreenState;
    type Intent = RegistrationIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RegistrationIntent::Insert(ch) => {
                match state.focused_field() {
                    Some(RegistrationField::Skills) => edit_skills(&mut state, TagKey::Char(ch)),
                    Some(RegistrationField::Resume) => state.resume_draft.push(ch),
                    Some(field) => edit_text(&mut state, field, |value| value.push(ch)),
                    None => {}
                }
                state
            }
            RegistrationIntent::Backspace => {
                match state.focused_field() {
                    Some(RegistrationField::Skills) => edit_skills(&mut state, TagKey::Backspace),
                    Some(RegistrationField::Resume) => {
                        state.resume_draft.pop();
                    }
                    Some(field) => edit_text(&mut state, field, |value| {
                        value.pop();
                    }),
                    None => {}
                }
                state
            }
            RegistrationIntent::FocusNext => move_focus(state, 1),
            RegistrationIntent::FocusPrev => move_focus(state, -1),
            RegistrationIntent::CycleOption { forward } => {
                let update = match state.focused_field() {
                    Some(RegistrationField::Experience) => RegistrationUpdate::Experience(
                        state.form.fields.experience.cycle(forward),
                    ),
                    Some(RegistrationField::NoticePeriod) => RegistrationUpdate::NoticePeriod(
                        state.form.fields.notice_period.cycle(forward),
                    ),
                    _ => return state,
                };
                apply(&mut state, update);
                state
            }
            RegistrationIntent::ToggleConsent => {
                let consent = !state.form.fields.consent;
                apply(&mut state, RegistrationUpdate::Consent(consent));
                state
            }
            RegistrationIntent::TogglePasswordVisibility => {
                state.show_password = !state.show_password;
                state
            }
            RegistrationIntent::CommitSkill => {
                if state.focused_field() == Some(RegistrationField::Skills) {
                    edit_skills(&mut state, TagKey::Enter);
                }
                state
            }
            RegistrationIntent::SelectSkill { forward } => {
                let len = state.form.skills.skills().len();
                state.skill_cursor = match (state.skill_cursor, forward) {
                    _ if len == 0 => None,
                    (None, true) => Some(0),
                    (None, false) => Some(len - 1),
                    (Some(i), true) if i + 1 < len => Some(i + 1),
                    (Some(i), false) if i > 0 => Some(i - 1),
                    (Some(_), _) => None,
                };
                state
            }
            RegistrationIntent::RemoveSelectedSkill => {
                if let Some(skill) = state.selected_skill().map(str::to_owned) {
                    state.form.skills.remove(&skill);
                    debug!(skill = %skill, "Skill removed");
                    clamp_skill_cursor(&mut state);
                    revalidate(&mut state, RegistrationField::Skills);
                }
                state
            }
            RegistrationIntent::ResumeChosen { file_name } => {
                let name = file_name.unwrap_or_default();
                debug!(chosen = !name.is_empty(), "Resume selection changed");
                apply(&mut state, RegistrationUpdate::ResumeFileName(name));
                state
            }
            RegistrationIntent::Submit => {
                if state.submitting {
                    return state;
                }
                state.errors = state.form.validate();
                state.attempted = true;
                state.notice = None;
                if let Some(first) = state.errors.fields().next() {
                    state.focus = RegistrationFocus::Field(first);
                }
                debug!(errors = state.errors.len(), "Registration form validated");
                state
            }
            RegistrationIntent::SubmissionStarted => {
                state.submitting = true;
                state
            }
            RegistrationIntent::SubmissionFinished { result, reset } => {
                state.submitting = false;
                state.notice = Some(Notice::from_result(&result));
                if result.is_ok() && reset {
                    state.form.reset();
                    state.errors.clear();
                    state.attempted = false;
                    state.resume_draft.clear();
                    state.skill_cursor = None;
                    state.focus = RegistrationFocus::default();
                }
                state
            }
            RegistrationIntent::DismissNotice => {
                state.notice = None;
                state
            }
        }
    }
}

fn apply(state: &mut RegistrationScreenState, update: RegistrationUpdate) {
    let field = update.field();
    state.form.fields.set(update);
    revalidate(state, field);
}

fn edit_text(
    state: &mut RegistrationScreenState,
    field: RegistrationField,
    edit: impl FnOnce(&mut String),
) {
    let Some(current) = state.form.fields.text(field) else {
        return;
    };
    let mut value = current.to_string();
    edit(&mut value);
    if let Some(update) = RegistrationUpdate::text(field, value) {
        apply(state, update);
    }
}

fn edit_skills(state: &mut RegistrationScreenState, key: TagKey) {
    match state.form.skills.handle_key(key) {
        TagEdit::Committed(AddOutcome::Added) | TagEdit::Popped(_) => {
            clamp_skill_cursor(state);
            revalidate(state, RegistrationField::Skills);
        }
        TagEdit::Committed(_) | TagEdit::Draft | TagEdit::Ignored => {}
    }
}

fn clamp_skill_cursor(state: &mut RegistrationScreenState) {
    let len = state.form.skills.skills().len();
    state.skill_cursor = match state.skill_cursor {
        Some(_) if len == 0 => None,
        Some(i) => Some(i.min(len - 1)),
        None => None,
    };
}

/// After the first submit attempt, keep the edited field and the fields
/// that depend on it in sync with their values.
fn revalidate(state: &mut RegistrationScreenState, field: RegistrationField) {
    if !state.attempted {
        return;
    }
    for field in std::iter::once(field).chain(field.dependents().iter().copied()) {
        let message = state.form.validate_field(field);
        state.errors.update(field, message);
    }
}

fn move_focus(mut state: RegistrationScreenState, step: isize) -> RegistrationScreenState {
    let order = state.focus_order();
    let len = order.len() as isize;
    let current = order.iter().position(|f| *f == state.focus).unwrap_or(0) as isize;
    state.focus = order[(current + step).rem_euclid(len) as usize];
    state.skill_cursor = None;
    state
}
