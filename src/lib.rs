//! Candidate portal forms: sign-in / sign-up and profile registration,
//! validated locally and submitted to an injected account service.

pub mod backend;
pub mod cli;
pub mod config;
pub mod form;
pub mod logging;
pub mod ui;
