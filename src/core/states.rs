//! Application state machine for the viewer
//!
//! The viewer has a deliberately small state flow:
//!
//! ```text
//! [Loading] → [Viewing]
//! ```
//!
//! - **Loading**: startup state. Settings are read from disk and the render
//!   surface is verified. Nothing is drawn yet.
//! - **Viewing**: the board (and pieces, when enabled) exist and the render
//!   loop runs for the remainder of the program.
//!
//! Scene construction is scheduled with `OnEnter(ViewerState::Viewing)`, so
//! every builder system can assume settings are resident and a primary
//! window exists. If no primary window entity is present during `Loading`
//! the app logs a fatal diagnostic and exits with an error code instead of
//! silently rendering nothing.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::resources::ViewerSettings;

/// Primary application state
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, States)]
pub enum ViewerState {
    /// Startup state: settings loading and surface verification
    #[default]
    Loading,

    /// Scene is built and being rendered continuously
    Viewing,
}

/// Gate system that moves the app from `Loading` to `Viewing`
///
/// Runs every frame while in `Loading`. Transitions once [`ViewerSettings`]
/// has been inserted by the settings loader. If the primary render surface
/// is missing entirely, exits the app with an error code; there is nothing
/// meaningful the viewer can do without a surface to draw on.
pub fn advance_to_viewing(
    settings: Option<Res<ViewerSettings>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut next_state: ResMut<NextState<ViewerState>>,
    mut app_exit: MessageWriter<AppExit>,
) {
    if windows.is_empty() {
        error!("[STARTUP] No primary window found; render surface is unavailable. Exiting.");
        app_exit.write(AppExit::error());
        return;
    }

    if settings.is_some() {
        info!("[STARTUP] Settings loaded and render surface present; entering Viewing");
        next_state.set(ViewerState::Viewing);
    }
}

/// Debug helper for logging the current viewer state
pub fn debug_current_state(state: Res<State<ViewerState>>) {
    info!("[DEBUG] Current State: {:?}", state.get());
}
