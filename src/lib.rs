// src/lib.rs

pub mod app;
pub mod config;
pub mod errors;
pub mod key_handlers;
pub mod log_view;
pub mod logging;
pub mod status_panel;
pub mod stream;
pub mod swap;
pub mod ui;

pub use app::{App, AppState};
