//! User preferences persisted between sessions: display language and theme.
//! Nothing else survives a restart.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    Ko,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[Language::En, Language::Es, Language::Fr, Language::Ko]
    }

    /// Native name shown in the language selector
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
            Language::Fr => "Français",
            Language::Ko => "한국어",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub theme: Theme,
}

impl Preferences {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| AppError::Settings(format!("read {}: {}", path.display(), e)))?;
        serde_json::from_str(&contents)
            .map_err(|e| AppError::Settings(format!("parse {}: {}", path.display(), e)))
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Settings(e.to_string()))?;
        std::fs::write(path, contents)
            .map_err(|e| AppError::Settings(format!("write {}: {}", path.display(), e)))
    }

    /// Load, falling back to defaults when the file is missing or unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from_file(path) {
            Ok(prefs) => {
                tracing::info!(path = %path.display(), "Loaded preferences");
                prefs
            }
            Err(e) => {
                tracing::debug!(error = %e, "Using default preferences");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferences_file_round_trip() {
        let path = std::env::temp_dir().join(format!("swap-prefs-{}.json", uuid::Uuid::new_v4()));
        let prefs = Preferences { language: Language::Ko, theme: Theme::Light };
        prefs.save_to_file(&path).unwrap();

        let loaded = Preferences::load_from_file(&path).unwrap();
        assert_eq!(loaded, prefs);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let path = std::env::temp_dir().join("swap-prefs-does-not-exist.json");
        assert_eq!(Preferences::load_or_default(&path), Preferences::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let prefs: Preferences = serde_json::from_str(r#"{"language":"fr"}"#).unwrap();
        assert_eq!(prefs.language, Language::Fr);
        assert_eq!(prefs.theme, Theme::Dark);
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }
}
