//! In-memory preference flags owned by the settings screen.

use crate::utils::i18n::T;

/// Card a flag is rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Notifications,
    Preferences,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Notifications, Section::Preferences];

    pub fn title(&self) -> T {
        match self {
            Section::Notifications => T::Notifications,
            Section::Preferences => T::Preferences,
        }
    }

    /// Flags of this section in display order
    pub fn flags(&self) -> impl Iterator<Item = Flag> + '_ {
        Flag::ALL.into_iter().filter(move |flag| flag.section() == *self)
    }
}

/// One boolean preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    DesktopNotifications,
    TaskbarFlashing,
    NotificationSounds,
    HideUserDetails,
    LargerText,
}

impl Flag {
    pub const ALL: [Flag; 5] = [
        Flag::DesktopNotifications,
        Flag::TaskbarFlashing,
        Flag::NotificationSounds,
        Flag::HideUserDetails,
        Flag::LargerText,
    ];

    /// Stable identifier, also used as the toggle's widget id.
    pub fn key(&self) -> &'static str {
        match self {
            Flag::DesktopNotifications => "desktopNotifications",
            Flag::TaskbarFlashing => "taskbarFlashing",
            Flag::NotificationSounds => "notificationSounds",
            Flag::HideUserDetails => "hideUserDetails",
            Flag::LargerText => "largerText",
        }
    }

    pub fn label(&self) -> T {
        match self {
            Flag::DesktopNotifications => T::EnableDesktopNotifications,
            Flag::TaskbarFlashing => T::EnableTaskbarFlashing,
            Flag::NotificationSounds => T::EnableNotificationSounds,
            Flag::HideUserDetails => T::HideUserDetails,
            Flag::LargerText => T::EnableLargerText,
        }
    }

    pub fn section(&self) -> Section {
        match self {
            Flag::DesktopNotifications | Flag::TaskbarFlashing | Flag::NotificationSounds => {
                Section::Notifications
            }
            Flag::HideUserDetails | Flag::LargerText => Section::Preferences,
        }
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Current value of every flag. All flags start enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreferenceFlags {
    desktop_notifications: bool,
    taskbar_flashing: bool,
    notification_sounds: bool,
    hide_user_details: bool,
    larger_text: bool,
}

impl Default for PreferenceFlags {
    fn default() -> Self {
        Self {
            desktop_notifications: true,
            taskbar_flashing: true,
            notification_sounds: true,
            hide_user_details: true,
            larger_text: true,
        }
    }
}

impl PreferenceFlags {
    pub fn get(&self, flag: Flag) -> bool {
        match flag {
            Flag::DesktopNotifications => self.desktop_notifications,
            Flag::TaskbarFlashing => self.taskbar_flashing,
            Flag::NotificationSounds => self.notification_sounds,
            Flag::HideUserDetails => self.hide_user_details,
            Flag::LargerText => self.larger_text,
        }
    }

    /// Replace the value of `flag`. Returns true if the value changed.
    pub fn set(&mut self, flag: Flag, value: bool) -> bool {
        let slot = self.slot_mut(flag);
        let changed = *slot != value;
        *slot = value;
        changed
    }

    /// Flip `flag` and return its new value.
    pub fn toggle(&mut self, flag: Flag) -> bool {
        let slot = self.slot_mut(flag);
        *slot = !*slot;
        *slot
    }

    pub fn iter(&self) -> impl Iterator<Item = (Flag, bool)> + '_ {
        Flag::ALL.into_iter().map(move |flag| (flag, self.get(flag)))
    }

    fn slot_mut(&mut self, flag: Flag) -> &mut bool {
        match flag {
            Flag::DesktopNotifications => &mut self.desktop_notifications,
            Flag::TaskbarFlashing => &mut self.taskbar_flashing,
            Flag::NotificationSounds => &mut self.notification_sounds,
            Flag::HideUserDetails => &mut self.hide_user_details,
            Flag::LargerText => &mut self.larger_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_flags_start_enabled() {
        let flags = PreferenceFlags::default();
        assert!(flags.iter().all(|(_, value)| value));
        assert_eq!(flags.iter().count(), 5);
    }

    #[test]
    fn test_toggle_only_touches_one_flag() {
        for flag in Flag::ALL {
            let mut flags = PreferenceFlags::default();
            assert!(!flags.toggle(flag));
            for (other, value) in flags.iter() {
                assert_eq!(value, other != flag, "{} after toggling {}", other, flag);
            }
        }
    }

    #[test]
    fn test_double_toggle_restores_value() {
        let mut flags = PreferenceFlags::default();
        flags.set(Flag::LargerText, false);
        let before = flags;
        for flag in Flag::ALL {
            flags.toggle(flag);
            flags.toggle(flag);
        }
        assert_eq!(flags, before);
    }

    #[test]
    fn test_set_reports_change() {
        let mut flags = PreferenceFlags::default();
        assert!(!flags.set(Flag::TaskbarFlashing, true));
        assert!(flags.set(Flag::TaskbarFlashing, false));
        assert!(!flags.get(Flag::TaskbarFlashing));
    }

    #[test]
    fn test_sections() {
        let notifications: Vec<_> = Section::Notifications.flags().collect();
        assert_eq!(
            notifications,
            vec![Flag::DesktopNotifications, Flag::TaskbarFlashing, Flag::NotificationSounds]
        );
        let preferences: Vec<_> = Section::Preferences.flags().collect();
        assert_eq!(preferences, vec![Flag::HideUserDetails, Flag::LargerText]);
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<_> = Flag::ALL.iter().map(|f| f.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Flag::ALL.len());
    }
}
