pub mod app;
pub mod auth;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod notice;
pub mod registration;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod widgets;

pub use runtime::run;
