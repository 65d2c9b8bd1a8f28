//! Translation tables for every user-visible string.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Spanish,
}

/// Text keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum T {
    // Menu
    File,
    Exit,
    View,
    DarkMode,
    Help,
    About,
    AboutTitle,
    AppName,
    AboutVersion,
    AboutCompany,
    Close,

    // Screen
    SettingsTitle,
    SidebarHint,
    Notifications,
    Preferences,

    // Rows
    EnableDesktopNotifications,
    EnableTaskbarFlashing,
    EnableNotificationSounds,
    HideUserDetails,
    EnableLargerText,
}

/// Look up the text for `key` in `lang`.
pub fn t(key: T, lang: Language) -> &'static str {
    match lang {
        Language::English => english(key),
        Language::Spanish => spanish(key),
    }
}

fn english(key: T) -> &'static str {
    match key {
        T::File => "File",
        T::Exit => "Exit",
        T::View => "View",
        T::DarkMode => "Dark mode",
        T::Help => "Help",
        T::About => "About",
        T::AboutTitle => "About Settings Panel",
        T::AppName => "Settings Panel",
        T::AboutVersion => concat!("Version ", env!("CARGO_PKG_VERSION")),
        T::AboutCompany => "Digital Enginks",
        T::Close => "Close",

        T::SettingsTitle => "Settings and Preferences",
        T::SidebarHint => "Changes apply to this session only.",
        T::Notifications => "Notifications",
        T::Preferences => "Preferences",

        T::EnableDesktopNotifications => "Enable Desktop Notifications",
        T::EnableTaskbarFlashing => "Enable Taskbar Flashing",
        T::EnableNotificationSounds => "Enable Notification Sounds",
        T::HideUserDetails => "Privacy - Hide User Details from Others",
        T::EnableLargerText => "Enable Larger Text",
    }
}

fn spanish(key: T) -> &'static str {
    match key {
        T::File => "Archivo",
        T::Exit => "Salir",
        T::View => "Ver",
        T::DarkMode => "Modo oscuro",
        T::Help => "Ayuda",
        T::About => "Acerca de",
        T::AboutTitle => "Acerca de Panel de Ajustes",
        T::AppName => "Panel de Ajustes",
        T::AboutVersion => concat!("Versión ", env!("CARGO_PKG_VERSION")),
        T::AboutCompany => "Digital Enginks",
        T::Close => "Cerrar",

        T::SettingsTitle => "Ajustes y preferencias",
        T::SidebarHint => "Los cambios solo se aplican a esta sesión.",
        T::Notifications => "Notificaciones",
        T::Preferences => "Preferencias",

        T::EnableDesktopNotifications => "Activar notificaciones de escritorio",
        T::EnableTaskbarFlashing => "Activar parpadeo de la barra de tareas",
        T::EnableNotificationSounds => "Activar sonidos de notificación",
        T::HideUserDetails => "Privacidad - Ocultar mis datos a otros usuarios",
        T::EnableLargerText => "Activar texto más grande",
    }
}
