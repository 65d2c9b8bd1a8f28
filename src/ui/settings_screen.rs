//! Settings Screen
//!
//! Fixed sidebar on the left, one card per section in the main area. Every
//! row binds one toggle to one preference flag.

use eframe::egui;

use crate::preferences::{Flag, PreferenceFlags, Section};
use crate::ui::card::Card;
use crate::ui::toggle::Toggle;
use crate::utils::i18n::{self, T, Language};

const SIDEBAR_WIDTH: f32 = 220.0;

/// Widget id of the toggle bound to `flag`
pub fn toggle_id(flag: Flag) -> egui::Id {
    egui::Id::new(("settings_toggle", flag.key()))
}

/// Owns the preference flags for as long as the screen lives.
#[derive(Debug, Default)]
pub struct SettingsScreen {
    flags: PreferenceFlags,
}

impl SettingsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flags(&self) -> &PreferenceFlags {
        &self.flags
    }

    /// Render the sidebar and the main area. Must be called before any
    /// `CentralPanel` of the same frame.
    pub fn show(&mut self, ctx: &egui::Context, lang: Language) {
        egui::SidePanel::left("settings_sidebar")
            .resizable(false)
            .exact_width(SIDEBAR_WIDTH)
            .show(ctx, |ui| {
                self.show_sidebar(ui, lang);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    for section in Section::ALL {
                        self.show_section(ui, section, lang);
                        ui.add_space(12.0);
                    }
                });
        });
    }

    fn show_sidebar(&self, ui: &mut egui::Ui, lang: Language) {
        ui.add_space(12.0);
        ui.heading(egui::RichText::new(i18n::t(T::SettingsTitle, lang)).size(22.0).strong());
        ui.separator();
        ui.label(egui::RichText::new(i18n::t(T::SidebarHint, lang)).small().weak());
    }

    fn show_section(&mut self, ui: &mut egui::Ui, section: Section, lang: Language) {
        Card::new()
            .title(i18n::t(section.title(), lang))
            .show(ui, |ui| {
                for flag in section.flags() {
                    self.show_row(ui, flag, lang);
                }
            });
    }

    fn show_row(&mut self, ui: &mut egui::Ui, flag: Flag, lang: Language) {
        let label = i18n::t(flag.label(), lang);
        let current = self.flags.get(flag);
        let flags = &mut self.flags;

        ui.horizontal(|ui| {
            ui.label(label);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let toggle = Toggle::new(toggle_id(flag), current, |value| {
                    if flags.set(flag, value) {
                        tracing::info!(flag = flag.key(), value, "Preference changed");
                    }
                })
                .label(label);
                ui.add(toggle);
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_screen_has_all_flags_enabled() {
        let screen = SettingsScreen::new();
        for flag in Flag::ALL {
            assert!(screen.flags().get(flag), "{} should start enabled", flag);
        }
    }

    #[test]
    fn test_toggle_ids_are_distinct() {
        let ids: std::collections::HashSet<_> = Flag::ALL.iter().map(|f| toggle_id(*f)).collect();
        assert_eq!(ids.len(), Flag::ALL.len());
    }
}
