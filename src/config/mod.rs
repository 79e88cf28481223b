//! Configuration file handling.
//!
//! Settings live in a TOML file; every section and key is optional and
//! falls back to its default.

mod loader;
mod types;

pub use loader::{ConfigError, MAX_DELAY_MS, TICK_RATE_RANGE_MS};
pub use types::{Config, FormsConfig, StartScreen, SubmissionConfig, UiConfig};
