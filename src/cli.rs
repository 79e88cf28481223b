use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, StartScreen};

#[derive(Debug, Parser)]
#[command(
    name = "portal-forms",
    version,
    about = "Sign-in, sign-up and candidate registration forms in the terminal"
)]
pub struct Cli {
    /// Config file to load instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Screen to open on
    #[arg(long, value_enum, value_name = "SCREEN")]
    pub screen: Option<StartScreen>,

    /// Simulated service latency in milliseconds
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Make every submission fail after the delay
    #[arg(long)]
    pub simulate_failure: bool,
}

impl Cli {
    /// Overlay command-line values on a loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(screen) = self.screen {
            config.forms.start_screen = screen;
        }
        if let Some(delay_ms) = self.delay_ms {
            config.submission.delay_ms = delay_ms;
        }
        if self.simulate_failure {
            config.submission.simulate_failure = true;
        }
    }

    /// Load the file named by `--config`, or the default one.
    pub fn load_config(&self) -> Result<Config, crate::config::ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }
}
