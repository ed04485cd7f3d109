//! Board theme application
//!
//! Writes the selected [`BoardTheme`](crate::core::BoardTheme) colors into
//! the two shared cell material assets. Because every cell holds one of the
//! two shared handles, this touches exactly two assets regardless of board
//! size.

use bevy::prelude::*;

use crate::core::ViewerSettings;
use crate::rendering::utils::BoardMaterials;

/// Applies the configured theme to the shared cell materials
pub fn apply_board_theme(
    settings: Res<ViewerSettings>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    board_materials: Res<BoardMaterials>,
) {
    let (light, dark) = settings.board_theme.colors();

    if let Some(light_mat) = materials.get_mut(&board_materials.light_cell) {
        light_mat.base_color = light;
    }
    if let Some(dark_mat) = materials.get_mut(&board_materials.dark_cell) {
        dark_mat.base_color = dark;
    }

    info!("[BOARD] Applied {} board theme", settings.board_theme.name());
}
