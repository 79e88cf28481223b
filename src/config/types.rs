use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub submission: SubmissionConfig,
    #[serde(default)]
    pub forms: FormsConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Behaviour of the simulated account/profile service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionConfig {
    /// Simulated service latency in milliseconds (default: 900).
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// Fail every submission after the delay (default: false).
    #[serde(default)]
    pub simulate_failure: bool,
    /// Reason reported when failures are simulated.
    #[serde(default = "default_failure_reason")]
    pub failure_reason: String,
}

/// Form behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormsConfig {
    /// Clear fields, skills and errors after a successful submission (default: false).
    #[serde(default)]
    pub reset_on_success: bool,
    /// Screen shown at startup.
    #[serde(default)]
    pub start_screen: StartScreen,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Screen the application opens on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum StartScreen {
    #[default]
    SignIn,
    SignUp,
    Registration,
}

fn default_delay_ms() -> u64 {
    900
}

fn default_failure_reason() -> String {
    "Service temporarily unavailable".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            simulate_failure: false,
            failure_reason: default_failure_reason(),
        }
    }
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            reset_on_success: false,
            start_screen: StartScreen::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
