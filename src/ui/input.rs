use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::form::RegistrationField;
use crate::ui::app::{App, Screen};
use crate::ui::auth::{AuthFocus, AuthIntent, AuthScreenState};
use crate::ui::registration::{RegistrationFocus, RegistrationIntent, RegistrationScreenState};

/// What a key press asks the application to do.
#[derive(Debug, Clone)]
pub enum Command {
    Quit,
    OpenRegistration,
    OpenSignIn,
    /// Resolve the typed resume path.
    ChooseResume,
    Auth(AuthIntent),
    Registration(RegistrationIntent),
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    let command = match app.screen() {
        Screen::Auth => auth_command(app.auth(), key),
        Screen::Registration => registration_command(app.registration(), key),
    };
    let Some(command) = command else {
        return;
    };
    match command {
        Command::Quit => app.request_quit(),
        Command::OpenRegistration => app.open_registration(),
        Command::OpenSignIn => app.open_sign_in(),
        Command::ChooseResume => app.choose_resume(),
        Command::Auth(intent) => app.dispatch_auth(intent),
        Command::Registration(intent) => app.dispatch_registration(intent),
    }
}

/// Key bindings of the sign-in / sign-up screen.
pub fn auth_command(state: &AuthScreenState, key: KeyEvent) -> Option<Command> {
    if is_ctrl_char(key, 'q') {
        return Some(Command::Quit);
    }
    if is_ctrl_char(key, 'r') {
        return Some(Command::OpenRegistration);
    }
    if is_ctrl_char(key, 't') {
        return Some(Command::Auth(AuthIntent::ToggleMode));
    }
    if is_ctrl_char(key, 'p') {
        return Some(Command::Auth(AuthIntent::TogglePasswordVisibility));
    }

    let intent = match key.code {
        KeyCode::Esc if state.notice.is_some() => AuthIntent::DismissNotice,
        KeyCode::Tab | KeyCode::Down => AuthIntent::FocusNext,
        KeyCode::BackTab | KeyCode::Up => AuthIntent::FocusPrev,
        KeyCode::Enter => match state.focus {
            AuthFocus::SwitchMode => AuthIntent::ToggleMode,
            AuthFocus::Field(_) | AuthFocus::Submit => AuthIntent::Submit,
        },
        KeyCode::Backspace => AuthIntent::Backspace,
        KeyCode::Char(ch) if is_plain(key) => AuthIntent::Insert(ch),
        _ => return None,
    };
    Some(Command::Auth(intent))
}

/// Key bindings of the registration screen.
pub fn registration_command(state: &RegistrationScreenState, key: KeyEvent) -> Option<Command> {
    if is_ctrl_char(key, 'q') {
        return Some(Command::Quit);
    }
    if is_ctrl_char(key, 'p') {
        return Some(Command::Registration(
            RegistrationIntent::TogglePasswordVisibility,
        ));
    }

    let intent = match (state.focus, key.code) {
        (_, KeyCode::Esc) if state.notice.is_some() => RegistrationIntent::DismissNotice,
        (_, KeyCode::Tab | KeyCode::Down) => RegistrationIntent::FocusNext,
        (_, KeyCode::BackTab | KeyCode::Up) => RegistrationIntent::FocusPrev,
        (RegistrationFocus::SignInLink, KeyCode::Enter) => return Some(Command::OpenSignIn),
        (RegistrationFocus::Submit, KeyCode::Enter) => RegistrationIntent::Submit,
        (RegistrationFocus::Field(field), code) => return field_command(field, code, key),
        _ => return None,
    };
    Some(Command::Registration(intent))
}

fn field_command(field: RegistrationField, code: KeyCode, key: KeyEvent) -> Option<Command> {
    let intent = match (field, code) {
        (RegistrationField::Experience | RegistrationField::NoticePeriod, KeyCode::Left) => {
            RegistrationIntent::CycleOption { forward: false }
        }
        (
            RegistrationField::Experience | RegistrationField::NoticePeriod,
            KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter,
        ) => RegistrationIntent::CycleOption { forward: true },
        (RegistrationField::Consent, KeyCode::Char(' ') | KeyCode::Enter) => {
            RegistrationIntent::ToggleConsent
        }
        (RegistrationField::Skills, KeyCode::Enter) => RegistrationIntent::CommitSkill,
        (RegistrationField::Skills, KeyCode::Left) => {
            RegistrationIntent::SelectSkill { forward: false }
        }
        (RegistrationField::Skills, KeyCode::Right) => {
            RegistrationIntent::SelectSkill { forward: true }
        }
        (RegistrationField::Skills, KeyCode::Delete) => RegistrationIntent::RemoveSelectedSkill,
        (RegistrationField::Resume, KeyCode::Enter) => return Some(Command::ChooseResume),
        (_, KeyCode::Enter) => RegistrationIntent::Submit,
        (_, KeyCode::Backspace) => RegistrationIntent::Backspace,
        (_, KeyCode::Char(ch)) if is_plain(key) => RegistrationIntent::Insert(ch),
        _ => return None,
    };
    Some(Command::Registration(intent))
}

fn is_plain(key: KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
