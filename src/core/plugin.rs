//! Core plugin for Boardscape
//!
//! Provides fundamental application setup:
//! - Window configuration resource
//! - Viewer state machine
//! - Settings load on startup and change-driven save
//! - The loading gate that verifies the render surface before anything is
//!   drawn
//!
//! This plugin has no dependencies on the rendering plugins and should be
//! added before them.

use bevy::prelude::*;

use super::settings_persistence::{load_settings_system, save_settings_system};
use super::states::{advance_to_viewing, ViewerState};
use super::{ViewerSettings, WindowConfig};

/// Core plugin for the viewer application
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WindowConfig>();

        app.init_state::<ViewerState>();

        // Register types for reflection
        app.register_type::<WindowConfig>()
            .register_type::<ViewerSettings>();

        app.add_systems(Startup, load_settings_system);

        app.add_systems(
            Update,
            (
                advance_to_viewing.run_if(in_state(ViewerState::Loading)),
                save_settings_system.run_if(resource_exists::<ViewerSettings>),
            ),
        );
    }
}
