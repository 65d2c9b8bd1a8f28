//! Settings Panel
//!
//! Desktop settings screen with notification and privacy toggles, built on
//! egui. Preference flags live in memory for the lifetime of the screen.

pub mod app;
pub mod config;
pub mod preferences;
pub mod ui;
pub mod utils;
