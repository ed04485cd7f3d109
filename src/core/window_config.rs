//! Window configuration resource
//!
//! Centralizes window settings for the application, allowing easy
//! configuration of the primary window before it is created.

use bevy::prelude::*;
use bevy::window::{MonitorSelection, PresentMode, VideoModeSelection, Window, WindowResolution};

/// Configuration for the primary application window
#[derive(Resource, Debug, Clone, Reflect)]
#[reflect(Resource)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in logical pixels
    pub width: u32,
    /// Window height in logical pixels
    pub height: u32,
    /// Whether the window should be resizable
    pub resizable: bool,
    /// Whether the window should start in fullscreen mode
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Boardscape - 3D Chess Board".to_string(),
            width: 1366,
            height: 768,
            resizable: true,
            fullscreen: false,
        }
    }
}

impl WindowConfig {
    /// Create a Bevy Window from this configuration
    pub fn to_window(&self) -> Window {
        Window {
            title: self.title.clone(),
            resolution: WindowResolution::new(self.width, self.height),
            resizable: self.resizable,
            present_mode: PresentMode::AutoVsync,
            mode: if self.fullscreen {
                bevy::window::WindowMode::Fullscreen(
                    MonitorSelection::Current,
                    VideoModeSelection::Current,
                )
            } else {
                bevy::window::WindowMode::Windowed
            },
            ..default()
        }
    }
}
