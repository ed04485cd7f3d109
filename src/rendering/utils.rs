//! Board rendering utilities - cell component and shared materials
//!
//! This module provides the pieces of visual state shared across the scene:
//!
//! - **Cell**: component identifying one board square's grid position
//! - **BoardMaterials**: resource holding the four material handles the
//!   scene uses (dark/light cells, dark/light pieces)
//!
//! # Checkerboard Coloring
//!
//! Cell `(x, y)` is dark iff `(x + y)` is even. This fixed parity rule is
//! what produces the alternating pattern; it is not configurable per cell.
//! Themes only change what color the dark/light material handles point at.
//!
//! # Material Sharing
//!
//! All dark cells share one `StandardMaterial` asset and all light cells
//! share another, so a theme change is two asset writes rather than a
//! 64-entity walk. Pieces likewise share one material per color.

use bevy::prelude::*;

/// Component identifying a board square's grid position
#[derive(Default, Component, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: u8,
    pub y: u8,
}

impl Cell {
    /// Returns true if this cell receives the dark material
    ///
    /// Dark iff `(x + y)` is even, the standard checkerboard parity.
    pub fn is_dark(&self) -> bool {
        (self.x as u16 + self.y as u16) % 2 == 0
    }
}

/// Resource holding the shared material handles for the scene
#[derive(Resource)]
pub struct BoardMaterials {
    pub dark_cell: Handle<StandardMaterial>,
    pub light_cell: Handle<StandardMaterial>,
    pub dark_piece: Handle<StandardMaterial>,
    pub light_piece: Handle<StandardMaterial>,
}

impl FromWorld for BoardMaterials {
    fn from_world(world: &mut World) -> Self {
        let mut materials = world
            .get_resource_mut::<Assets<StandardMaterial>>()
            .expect("Assets<StandardMaterial> should be initialized before BoardMaterials");
        BoardMaterials {
            // Cell colors are placeholders until the selected theme is applied
            dark_cell: materials.add(Color::BLACK),
            light_cell: materials.add(Color::WHITE),
            dark_piece: materials.add(StandardMaterial {
                base_color: Color::srgb(0.2, 0.2, 0.2),
                ..default()
            }),
            light_piece: materials.add(StandardMaterial {
                base_color: Color::srgb(0.8, 0.8, 0.8),
                ..default()
            }),
        }
    }
}

pub struct BoardAssetsPlugin;

impl Plugin for BoardAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BoardMaterials>();
    }
}
