use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::utils::i18n::Language;

const CONFIG_FILE_NAME: &str = "settings-panel.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to access config file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Window and appearance options. Preference flags are never stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {

    pub window_size: [f32; 2],

    pub min_window_size: [f32; 2],

    pub dark_mode: bool,

    pub language: Language,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_size: [960.0, 640.0],
            min_window_size: [640.0, 420.0],
            dark_mode: true,
            language: Language::English,
        }
    }
}

impl AppConfig {

    pub fn default_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("."))
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_FILE_NAME)
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::default_path())
    }

    /// Missing files yield the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::default_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("settings-panel-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_default_config() {
        let c = AppConfig::default();
        assert_eq!(c.window_size, [960.0, 640.0]);
        assert_eq!(c.dark_mode, true);
        assert_eq!(c.language, Language::English);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = temp_path("missing");
        let _ = std::fs::remove_file(&path);
        assert_eq!(AppConfig::load_from(&path).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("roundtrip");
        let config = AppConfig {
            dark_mode: false,
            language: Language::Spanish,
            ..Default::default()
        };
        config.save_to(&path).unwrap();
        let loaded = AppConfig::load_from(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let path = temp_path("partial");
        std::fs::write(&path, r#"{ "dark_mode": false }"#).unwrap();
        let loaded = AppConfig::load_from(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert!(!loaded.dark_mode);
        assert_eq!(loaded.window_size, AppConfig::default().window_size);
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let path = temp_path("invalid");
        std::fs::write(&path, "{ not json").unwrap();
        let err = AppConfig::load_from(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);
        assert!(matches!(err, ConfigError::Json { .. }));
        assert!(err.to_string().contains("invalid config file"));
    }
}
