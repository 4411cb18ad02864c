//! # Settings Handlers
//!
//! Handlers for language and theme changes, with persistence.

use std::path::Path;

use crate::config::{Language, Preferences, Theme};
use crate::core::error::Result;

/// Load preferences from `path`, falling back to defaults.
pub fn load_preferences(path: &Path) -> Preferences {
    Preferences::load_or_default(path)
}

/// Save preferences to `path`
pub fn save_preferences(preferences: &Preferences, path: &Path) -> Result<()> {
    preferences.save_to_file(path)?;
    tracing::info!(path = %path.display(), "Saved preferences");
    Ok(())
}

/// Handle language selection; persists on change.
pub fn handle_language_change(preferences: &mut Preferences, path: &Path, language: Language) {
    if preferences.language == language {
        return;
    }
    preferences.language = language;
    if let Err(e) = save_preferences(preferences, path) {
        tracing::warn!(error = %e, "Failed to persist language");
    }
}

/// Handle the light/dark toggle; persists the new theme.
pub fn handle_theme_toggle(preferences: &mut Preferences, path: &Path) -> Theme {
    preferences.theme = preferences.theme.toggled();
    if let Err(e) = save_preferences(preferences, path) {
        tracing::warn!(error = %e, "Failed to persist theme");
    }
    preferences.theme
}
