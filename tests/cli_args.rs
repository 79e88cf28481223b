//! Tests for CLI argument parsing and config overlay.

mod common;

use clap::Parser;
use portal_forms::cli::Cli;
use portal_forms::config::{Config, StartScreen};

use common::temp_config;

#[test]
fn test_no_args_leaves_config_untouched() {
    let cli = Cli::try_parse_from(["portal-forms"]).unwrap();
    let mut config = Config::default();
    cli.apply(&mut config);
    assert_eq!(config, Config::default());
}

#[test]
fn test_screen_values_are_kebab_case() {
    let cli = Cli::try_parse_from(["portal-forms", "--screen", "sign-up"]).unwrap();
    assert_eq!(cli.screen, Some(StartScreen::SignUp));

    let cli = Cli::try_parse_from(["portal-forms", "--screen", "registration"]).unwrap();
    assert_eq!(cli.screen, Some(StartScreen::Registration));

    assert!(Cli::try_parse_from(["portal-forms", "--screen", "dashboard"]).is_err());
}

#[test]
fn test_cli_overrides_file_values() {
    let (_dir, path) = temp_config(
        r#"
[submission]
delay_ms = 2000

[forms]
start_screen = "sign_up"
"#,
    );
    let path_arg = path.to_string_lossy().into_owned();
    let cli = Cli::try_parse_from([
        "portal-forms",
        "--config",
        path_arg.as_str(),
        "--delay-ms",
        "10",
        "--simulate-failure",
    ])
    .unwrap();

    let config = cli.load_config().unwrap();
    assert_eq!(config.submission.delay_ms, 10);
    assert!(config.submission.simulate_failure);
    // Not given on the command line, so the file wins.
    assert_eq!(config.forms.start_screen, StartScreen::SignUp);
}

#[test]
fn test_cli_values_are_validated() {
    let (_dir, path) = temp_config("");
    let path_arg = path.to_string_lossy().into_owned();
    let cli = Cli::try_parse_from([
        "portal-forms",
        "--config",
        path_arg.as_str(),
        "--delay-ms",
        "999999",
    ])
    .unwrap();
    assert!(cli.load_config().is_err());
}

#[test]
fn test_delay_must_be_a_number() {
    assert!(Cli::try_parse_from(["portal-forms", "--delay-ms", "soon"]).is_err());
}
