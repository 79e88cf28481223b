//! Stand-in service: waits, then answers.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::SubmissionConfig;

use super::{
    AuthService, Credentials, ProfileId, ProfileService, ProfileSubmission, SessionToken,
    SubmitError,
};

/// Sleeps for a fixed delay, then succeeds with a fresh id, or fails with
/// [`SubmitError::Unavailable`] when a failure reason is set.
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    delay: Duration,
    failure: Option<String>,
}

impl SimulatedBackend {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            failure: None,
        }
    }

    /// Make every call fail with `reason` after the delay.
    pub fn failing(mut self, reason: impl Into<String>) -> Self {
        self.failure = Some(reason.into());
        self
    }

    pub fn from_config(config: &SubmissionConfig) -> Self {
        let backend = Self::new(Duration::from_millis(config.delay_ms));
        if config.simulate_failure {
            backend.failing(config.failure_reason.clone())
        } else {
            backend
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    async fn respond(&self, operation: &str) -> Result<String, SubmitError> {
        tokio::time::sleep(self.delay).await;
        if let Some(reason) = &self.failure {
            warn!(operation, reason = %reason, "Simulated backend failure");
            return Err(SubmitError::Unavailable {
                reason: reason.clone(),
            });
        }
        Ok(Uuid::new_v4().to_string())
    }
}

#[async_trait]
impl AuthService for SimulatedBackend {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<SessionToken, SubmitError> {
        info!(username = %credentials.username, "Simulated sign-in");
        self.respond("sign_in").await.map(SessionToken::new)
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<SessionToken, SubmitError> {
        info!(username = %credentials.username, "Simulated sign-up");
        self.respond("sign_up").await.map(SessionToken::new)
    }
}

#[async_trait]
impl ProfileService for SimulatedBackend {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn create_profile(&self, profile: &ProfileSubmission) -> Result<ProfileId, SubmitError> {
        info!(email = %profile.email, skills = profile.skills.len(), "Simulated profile creation");
        self.respond("create_profile").await.map(ProfileId::new)
    }
}
