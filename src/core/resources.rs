//! Core resources for viewer-wide configuration
//!
//! These resources are global to the running app: what the board looks
//! like, which camera the scene gets, and how resize events are coalesced.
//! They are persisted across sessions by `settings_persistence`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Resource tracking user-facing viewer settings
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[reflect(Resource)]
pub struct ViewerSettings {
    /// Board color theme
    pub board_theme: BoardTheme,

    /// Camera placed when the scene is built
    pub camera_mode: CameraMode,

    /// Whether the 32 starting-position pieces are spawned
    pub show_pieces: bool,

    /// Quiet period for coalescing window-resize bursts, in milliseconds
    pub resize_debounce_ms: u64,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            board_theme: BoardTheme::Classic,
            camera_mode: CameraMode::Orbit,
            show_pieces: true,
            resize_debounce_ms: 200,
        }
    }
}

/// Board visual themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Reflect)]
pub enum BoardTheme {
    Classic,
    Modern,
    Wood,
    Marble,
}

impl BoardTheme {
    pub fn name(&self) -> &'static str {
        match self {
            BoardTheme::Classic => "Classic",
            BoardTheme::Modern => "Modern",
            BoardTheme::Wood => "Wood",
            BoardTheme::Marble => "Marble",
        }
    }

    /// Returns (light_cell_color, dark_cell_color)
    pub fn colors(&self) -> (Color, Color) {
        match self {
            BoardTheme::Classic => (
                Color::srgb(0.93, 0.93, 0.82), // Cream
                Color::srgb(0.46, 0.59, 0.34), // Green
            ),
            BoardTheme::Modern => (
                Color::srgb(0.9, 0.9, 0.9), // Light gray
                Color::srgb(0.3, 0.3, 0.3), // Dark gray
            ),
            BoardTheme::Wood => (
                Color::srgb(0.85, 0.70, 0.55), // Light wood
                Color::srgb(0.55, 0.35, 0.20), // Dark wood
            ),
            BoardTheme::Marble => (
                Color::srgb(0.95, 0.95, 0.95), // White marble
                Color::srgb(0.15, 0.15, 0.15), // Black marble
            ),
        }
    }
}

/// Which camera the scene is built with
///
/// The source material shipped three near-identical scene variants that
/// differed only in camera; a single configurable mode replaces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Reflect)]
pub enum CameraMode {
    /// Mouse-driven orbit around the board center
    #[default]
    Orbit,

    /// Static isometric orthographic view
    Fixed,
}

impl CameraMode {
    pub fn name(&self) -> &'static str {
        match self {
            CameraMode::Orbit => "Orbit",
            CameraMode::Fixed => "Fixed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        //! Default settings match the classic with-pieces orbit scene
        let settings = ViewerSettings::default();
        assert_eq!(settings.board_theme, BoardTheme::Classic);
        assert_eq!(settings.camera_mode, CameraMode::Orbit);
        assert!(settings.show_pieces);
        assert_eq!(settings.resize_debounce_ms, 200);
    }

    #[test]
    fn test_theme_colors_are_distinct() {
        //! Light and dark cells must be visually distinguishable in every theme
        for theme in [
            BoardTheme::Classic,
            BoardTheme::Modern,
            BoardTheme::Wood,
            BoardTheme::Marble,
        ] {
            let (light, dark) = theme.colors();
            assert_ne!(light, dark, "theme {} has equal colors", theme.name());
        }
    }

    #[test]
    fn test_settings_serde_round_trip() {
        //! Settings survive a JSON round trip unchanged
        let settings = ViewerSettings {
            board_theme: BoardTheme::Wood,
            camera_mode: CameraMode::Fixed,
            show_pieces: false,
            resize_debounce_ms: 350,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let parsed: ViewerSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, parsed);
    }
}
