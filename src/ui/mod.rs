//! UI components module

pub mod card;
pub mod settings_screen;
pub mod toggle;
