//! Services with scripted answers.

use async_trait::async_trait;
use portal_forms::backend::{
    AuthService, Credentials, ProfileId, ProfileService, ProfileSubmission, SessionToken,
    SubmitError,
};

/// Refuses every request with the given reason.
pub struct RejectingService {
    pub reason: String,
}

impl RejectingService {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn reject<T>(&self) -> Result<T, SubmitError> {
        Err(SubmitError::Rejected {
            reason: self.reason.clone(),
        })
    }
}

#[async_trait]
impl AuthService for RejectingService {
    fn name(&self) -> &'static str {
        "rejecting"
    }

    async fn sign_in(&self, _credentials: &Credentials) -> Result<SessionToken, SubmitError> {
        self.reject()
    }

    async fn sign_up(&self, _credentials: &Credentials) -> Result<SessionToken, SubmitError> {
        self.reject()
    }
}

#[async_trait]
impl ProfileService for RejectingService {
    fn name(&self) -> &'static str {
        "rejecting"
    }

    async fn create_profile(&self, _profile: &ProfileSubmission) -> Result<ProfileId, SubmitError> {
        self.reject()
    }
}

/// Panics inside the service call.
pub struct PanickingService;

fn explode<T>() -> T {
    panic!("service exploded")
}

#[async_trait]
impl AuthService for PanickingService {
    fn name(&self) -> &'static str {
        "panicking"
    }

    async fn sign_in(&self, _credentials: &Credentials) -> Result<SessionToken, SubmitError> {
        explode()
    }

    async fn sign_up(&self, _credentials: &Credentials) -> Result<SessionToken, SubmitError> {
        explode()
    }
}

#[async_trait]
impl ProfileService for PanickingService {
    fn name(&self) -> &'static str {
        "panicking"
    }

    async fn create_profile(&self, _profile: &ProfileSubmission) -> Result<ProfileId, SubmitError> {
        explode()
    }
}
