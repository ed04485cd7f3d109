//! Settings persistence system
//!
//! Saves and loads [`ViewerSettings`] to/from a JSON file. Provides automatic
//! persistence of user preferences across sessions.
//!
//! # File Location
//!
//! Settings are stored in `settings.json` in the user's configuration
//! directory (e.g. `~/.config/boardscape/settings.json`), falling back to
//! the working directory if the system config dir cannot be resolved.
//!
//! # Error Handling
//!
//! Both load and save operations handle errors gracefully:
//! - Load failures fall back to default settings
//! - Save failures are logged but don't interrupt rendering

use bevy::prelude::*;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::ViewerResult;
use super::resources::ViewerSettings;

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Helper to resolve the settings file path
fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "boardscape", "Boardscape") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        // Fallback to current directory
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Read settings from a JSON file
pub fn read_settings(path: &Path) -> ViewerResult<ViewerSettings> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Write settings to a JSON file, creating parent directories as needed
pub fn write_settings(path: &Path, settings: &ViewerSettings) -> ViewerResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load settings from file on startup
///
/// Attempts to load settings from the system config directory. If the file
/// doesn't exist or is invalid, uses default settings. This system should
/// run early in the startup schedule so settings are available before the
/// scene is built.
pub fn load_settings_system(mut commands: Commands) {
    let path = settings_path();

    if path.exists() {
        match read_settings(&path) {
            Ok(settings) => {
                info!("[SETTINGS] Loaded settings from {:?}", path);
                commands.insert_resource(settings);
                return;
            }
            Err(e) => {
                warn!(
                    "[SETTINGS] Failed to load settings from {:?}: {}. Using defaults.",
                    path, e
                );
            }
        }
    } else {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
    }

    commands.insert_resource(ViewerSettings::default());
}

/// Save settings to file when they change
///
/// Watches for changes to [`ViewerSettings`] and writes them back to
/// `settings.json`. Also fires once after the initial insert, which creates
/// the file on first run.
pub fn save_settings_system(settings: Res<ViewerSettings>) {
    if !settings.is_changed() {
        return;
    }

    let path = settings_path();
    match write_settings(&path, settings.as_ref()) {
        Ok(()) => info!("[SETTINGS] Saved settings to {:?}", path),
        Err(e) => error!("[SETTINGS] Failed to save settings to {:?}: {}", path, e),
    }
}
