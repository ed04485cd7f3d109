//! Core module - application state, configuration and infrastructure
//!
//! Provides the foundational pieces the rendering plugins build on:
//!
//! - [`ViewerState`] - two-phase state machine (Loading → Viewing)
//! - [`ViewerSettings`] - persisted user preferences (theme, camera, pieces)
//! - [`WindowConfig`] - primary window settings
//! - [`CorePlugin`] - wires settings persistence and the loading gate
//! - [`ViewerError`] - typed errors for settings and layout validation

pub mod error;
pub mod plugin;
pub mod resources;
pub mod settings_persistence;
pub mod states;
pub mod window_config;

// Re-export commonly used items
pub use error::{ViewerError, ViewerResult};
pub use plugin::CorePlugin;
pub use resources::*;
pub use states::*;
pub use window_config::WindowConfig;
