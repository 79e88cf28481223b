use std::path::Path;
use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::runtime::Handle;
use tracing::{debug, info, warn};

use crate::backend::{AuthService, Credentials, ProfileService, ProfileSubmission, SubmitError};
use crate::config::{FormsConfig, StartScreen};
use crate::form::{AuthMode, Refusal, SubmissionController};
use crate::ui::auth::{AuthIntent, AuthReducer, AuthScreenState};
use crate::ui::events::AppEvent;
use crate::ui::mvi::Reducer;
use crate::ui::registration::{RegistrationIntent, RegistrationReducer, RegistrationScreenState};

/// Dispatch an intent through a reducer, updating state in place.
///
/// Takes ownership via `std::mem::take` (requires `Default`), passes it
/// through the reducer, and writes the result back.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Auth,
    Registration,
}

/// Account and profile services the forms submit to.
#[derive(Clone)]
pub struct Services {
    pub auth: Arc<dyn AuthService>,
    pub profiles: Arc<dyn ProfileService>,
}

pub struct App {
    should_quit: bool,
    screen: Screen,
    /// Sign-in / sign-up screen state (MVI pattern).
    auth: AuthScreenState,
    /// Registration screen state (MVI pattern).
    registration: RegistrationScreenState,
    auth_submission: SubmissionController,
    registration_submission: SubmissionController,
    services: Services,
    runtime: Handle,
    events: Sender<AppEvent>,
    reset_on_success: bool,
    tick: u64,
}

impl App {
    pub fn new(
        forms: &FormsConfig,
        services: Services,
        runtime: Handle,
        events: Sender<AppEvent>,
    ) -> Self {
        let (screen, mode) = match forms.start_screen {
            StartScreen::SignIn => (Screen::Auth, AuthMode::SignIn),
            StartScreen::SignUp => (Screen::Auth, AuthMode::SignUp),
            StartScreen::Registration => (Screen::Registration, AuthMode::SignIn),
        };
        Self {
            should_quit: false,
            screen,
            auth: AuthScreenState::new(mode),
            registration: RegistrationScreenState::new(),
            auth_submission: SubmissionController::new(),
            registration_submission: SubmissionController::new(),
            services,
            runtime,
            events,
            reset_on_success: forms.reset_on_success,
            tick: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn auth(&self) -> &AuthScreenState {
        &self.auth
    }

    pub fn registration(&self) -> &RegistrationScreenState {
        &self.registration
    }

    /// True while the visible form has a submission in flight.
    pub fn is_busy(&self) -> bool {
        match self.screen {
            Screen::Auth => self.auth_submission.is_submitting(),
            Screen::Registration => self.registration_submission.is_submitting(),
        }
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn open_registration(&mut self) {
        debug!("Showing registration screen");
        self.screen = Screen::Registration;
    }

    /// Back to the sign-in form, switching out of sign-up if needed.
    pub fn open_sign_in(&mut self) {
        debug!("Showing sign-in screen");
        self.screen = Screen::Auth;
        if self.auth.mode() != AuthMode::SignIn {
            dispatch_mvi!(self, auth, AuthReducer, AuthIntent::ToggleMode);
        }
    }

    pub fn dispatch_auth(&mut self, intent: AuthIntent) {
        let submit = matches!(intent, AuthIntent::Submit);
        dispatch_mvi!(self, auth, AuthReducer, intent);
        if submit {
            self.start_auth_submission();
        }
    }

    pub fn dispatch_registration(&mut self, intent: RegistrationIntent) {
        let submit = matches!(intent, RegistrationIntent::Submit);
        dispatch_mvi!(self, registration, RegistrationReducer, intent);
        if submit {
            self.start_registration_submission();
        }
    }

    /// Resolve the typed resume path. Only an existing file is accepted;
    /// anything else clears the current choice.
    pub fn choose_resume(&mut self) {
        let file_name = resume_file_name(Path::new(self.registration.resume_draft.trim()));
        if file_name.is_none() {
            debug!("Resume path does not name a file");
        }
        self.dispatch_registration(RegistrationIntent::ResumeChosen { file_name });
    }

    pub fn on_auth_submitted(&mut self, result: Result<String, SubmitError>) {
        let reset = self.reset_on_success;
        dispatch_mvi!(
            self,
            auth,
            AuthReducer,
            AuthIntent::SubmissionFinished { result, reset }
        );
    }

    pub fn on_registration_submitted(&mut self, result: Result<String, SubmitError>) {
        let reset = self.reset_on_success;
        dispatch_mvi!(
            self,
            registration,
            RegistrationReducer,
            RegistrationIntent::SubmissionFinished { result, reset }
        );
    }

    fn start_auth_submission(&mut self) {
        let ticket = match self.auth_submission.begin(&self.auth.errors) {
            Ok(ticket) => ticket,
            Err(Refusal::Invalid) => return,
            Err(Refusal::Busy) => {
                debug!("Sign-in already in flight");
                return;
            }
        };
        dispatch_mvi!(self, auth, AuthReducer, AuthIntent::SubmissionStarted);

        let mode = self.auth.mode();
        let credentials = Credentials::from_fields(&self.auth.form.fields);
        let service = Arc::clone(&self.services.auth);
        info!(service = service.name(), ?mode, username = %credentials.username, "Submitting credentials");

        let work = async move {
            let token = match mode {
                AuthMode::SignIn => service.sign_in(&credentials).await,
                AuthMode::SignUp => service.sign_up(&credentials).await,
            }?;
            debug!(token = token.as_str(), "Session issued");
            Ok::<_, SubmitError>(mode.success_message(&credentials.username))
        };
        self.spawn_submission(ticket.run(work), AppEvent::AuthSubmitted);
    }

    fn start_registration_submission(&mut self) {
        let ticket = match self.registration_submission.begin(&self.registration.errors) {
            Ok(ticket) => ticket,
            Err(Refusal::Invalid) => return,
            Err(Refusal::Busy) => {
                debug!("Registration already in flight");
                return;
            }
        };
        dispatch_mvi!(
            self,
            registration,
            RegistrationReducer,
            RegistrationIntent::SubmissionStarted
        );

        let profile = ProfileSubmission::from_form(&self.registration.form);
        let service = Arc::clone(&self.services.profiles);
        info!(service = service.name(), skills = profile.skills.len(), "Submitting profile");

        let work = async move {
            let id = service.create_profile(&profile).await?;
            info!(profile_id = %id, "Profile created");
            Ok::<_, SubmitError>("Registration successful. Profile created.".to_string())
        };
        self.spawn_submission(ticket.run(work), AppEvent::RegistrationSubmitted);
    }

    /// Run a submission on the runtime and post its result back to the UI
    /// loop. A panicking task is reported as [`SubmitError::Interrupted`];
    /// its ticket has already been released by then.
    fn spawn_submission<F>(
        &self,
        submission: F,
        into_event: fn(Result<String, SubmitError>) -> AppEvent,
    ) where
        F: std::future::Future<Output = Result<String, SubmitError>> + Send + 'static,
    {
        let events = self.events.clone();
        let task = self.runtime.spawn(submission);
        self.runtime.spawn(async move {
            let result = task.await.unwrap_or_else(|err| {
                warn!(error = %err, "Submission task failed");
                Err(SubmitError::Interrupted)
            });
            if let Err(err) = &result {
                warn!(error = %err, "Submission failed");
            }
            let _ = events.send(into_event(result));
        });
    }
}

/// Document types accepted as a resume.
pub const RESUME_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

/// File name of `path` when it names an existing PDF or Word document.
pub fn resume_file_name(path: &Path) -> Option<String> {
    if !path.is_file() {
        return None;
    }
    let extension = path.extension()?.to_str()?;
    if !RESUME_EXTENSIONS
        .iter()
        .any(|allowed| extension.eq_ignore_ascii_case(allowed))
    {
        return None;
    }
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resume_requires_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("cv.pdf");
        std::fs::write(&file, b"%PDF").unwrap();

        assert_eq!(resume_file_name(&file), Some("cv.pdf".to_string()));
        assert_eq!(resume_file_name(dir.path()), None);
        assert_eq!(resume_file_name(&dir.path().join("missing.pdf")), None);
    }

    #[test]
    fn resume_accepts_only_documents() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("holiday.png");
        let word = dir.path().join("CV.DOCX");
        let bare = dir.path().join("resume");
        for file in [&image, &word, &bare] {
            std::fs::write(file, b"data").unwrap();
        }

        assert_eq!(resume_file_name(&image), None);
        assert_eq!(resume_file_name(&bare), None);
        assert_eq!(resume_file_name(&word), Some("CV.DOCX".to_string()));
    }
}
