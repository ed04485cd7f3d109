//! Board creation and rendering
//!
//! Spawns the base slab and its grid of cell children. All cells share one
//! box mesh handle; parity picks between the two shared cell materials. The
//! grid is centered on the board origin, so the board entity itself sits at
//! the world origin with an identity transform.

use bevy::prelude::*;

use super::coordinates::BoardLayout;
use super::theme::apply_board_theme;
use crate::core::ViewerState;
use crate::rendering::utils::{BoardMaterials, Cell};

/// Marker component for the board's base slab entity
#[derive(Component)]
pub struct Board;

/// Spawns one board: a base slab with `cells_count²` cell children
///
/// Cell `(i, j)` is a thin box of side `cell_size` and thickness
/// `board_height`, translated by the shared centering formula and colored
/// dark iff `(i + j)` is even. Calling this twice produces two independent
/// boards; it is not a singleton.
pub fn create_board(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    layout: Res<BoardLayout>,
    materials: Res<BoardMaterials>,
) {
    let span = layout.board_span();
    let slab_mesh = meshes.add(Cuboid::new(span, layout.board_height, span));
    let cell_mesh = meshes.add(Cuboid::new(
        layout.cell_size,
        layout.board_height,
        layout.cell_size,
    ));

    commands
        .spawn((
            Mesh3d(slab_mesh),
            MeshMaterial3d(materials.dark_cell.clone()),
            Transform::default(),
            Board,
            Name::new("Board"),
        ))
        .with_children(|parent| {
            for i in 0..layout.cells_count {
                for j in 0..layout.cells_count {
                    let cell = Cell { x: i, y: j };
                    let material = if cell.is_dark() {
                        materials.dark_cell.clone()
                    } else {
                        materials.light_cell.clone()
                    };

                    parent.spawn((
                        Mesh3d(cell_mesh.clone()),
                        MeshMaterial3d(material),
                        Transform::from_translation(layout.square_center(i, j)),
                        cell,
                        Name::new(cell_label(&cell)),
                    ));
                }
            }
        });

    info!(
        "[BOARD] Created {}x{} board ({} cells)",
        layout.cells_count,
        layout.cells_count,
        layout.cells_count as u32 * layout.cells_count as u32
    );
}

/// Cell name in chess notation where it applies ("Cell a1"), grid
/// coordinates otherwise
fn cell_label(cell: &Cell) -> String {
    if cell.x < 26 {
        let file = (b'a' + cell.x) as char;
        format!("Cell {}{}", file, cell.y as u32 + 1)
    } else {
        format!("Cell {}-{}", cell.x, cell.y)
    }
}

pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BoardLayout>();
        app.register_type::<BoardLayout>();
        app.add_systems(
            OnEnter(ViewerState::Viewing),
            (apply_board_theme, create_board).chain(),
        );
    }
}
