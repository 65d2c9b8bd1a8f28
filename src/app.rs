use eframe::egui;

use crate::config::settings::AppConfig;
use crate::ui::settings_screen::SettingsScreen;
use crate::ui::toggle;
use crate::utils::i18n::{self, T, Language};


pub struct SettingsApp {

    config: AppConfig,

    screen: SettingsScreen,

    show_about: bool,
}

impl SettingsApp {

    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            screen: SettingsScreen::new(),
            show_about: false,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn screen(&self) -> &SettingsScreen {
        &self.screen
    }

    fn set_language(&mut self, lang: Language) {
        if self.config.language != lang {
            self.config.language = lang;
            self.persist_config();
        }
    }

    fn set_dark_mode(&mut self, dark_mode: bool) {
        if self.config.dark_mode != dark_mode {
            self.config.dark_mode = dark_mode;
            self.persist_config();
        }
    }

    fn persist_config(&self) {
        if let Err(e) = self.config.save() {
            tracing::warn!("Could not save config: {:#}", anyhow::Error::from(e));
        }
    }

    /// Draw one frame. Split from `eframe::App::update` so it can run on a bare `egui::Context`.
    pub fn ui(&mut self, ctx: &egui::Context) {
        ctx.set_visuals(if self.config.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        let lang = self.config.language;

        let mut dark_mode = self.config.dark_mode;
        let mut new_lang = lang;
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button(i18n::t(T::File, lang), |ui| {
                    if ui.button(i18n::t(T::Exit, lang)).clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button(i18n::t(T::View, lang), |ui| {
                    ui.horizontal(|ui| {
                        toggle::toggle(ui, "dark_mode_toggle", dark_mode, |value| dark_mode = value);
                        ui.label(i18n::t(T::DarkMode, lang));
                    });

                    ui.separator();
                    ui.label("Language / Idioma");
                    if ui.selectable_label(lang == Language::English, "English").clicked() {
                        new_lang = Language::English;
                    }
                    if ui.selectable_label(lang == Language::Spanish, "Español").clicked() {
                        new_lang = Language::Spanish;
                    }
                });
                ui.menu_button(i18n::t(T::Help, lang), |ui| {
                    if ui.button(i18n::t(T::About, lang)).clicked() {
                        self.show_about = true;
                    }
                });
            });
        });
        self.set_dark_mode(dark_mode);
        self.set_language(new_lang);

        if self.show_about {
            egui::Window::new(i18n::t(T::AboutTitle, lang))
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading(i18n::t(T::AppName, lang));
                        ui.label(egui::RichText::new(i18n::t(T::AboutVersion, lang)).strong());
                        ui.add_space(10.0);
                        ui.separator();
                        ui.add_space(10.0);
                        ui.label(i18n::t(T::AboutCompany, lang));
                        ui.add_space(20.0);
                        if ui.button(i18n::t(T::Close, lang)).clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }

        self.screen.show(ctx, lang);
    }
}

impl eframe::App for SettingsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}
