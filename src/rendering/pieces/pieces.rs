//! Chess piece construction and placement
//!
//! Pieces are assembled from engine primitives - no model assets. Each
//! piece is a meshless root entity (carrying [`Piece`]) with three mesh
//! children: a flat base token, a tapered body, and a head accessory, all
//! sharing the piece's material. The per-type geometry comes from the
//! [`ShapeRecipe`] lookup.
//!
//! Per-type meshes are built once at startup into [`PieceMeshes`] and
//! shared by handle across all 32 pieces.
//!
//! # Placement
//!
//! A piece's board coordinates live on its [`Piece`] component; the
//! [`sync_piece_transforms`] system maps them to world space through the
//! same centering formula the cells use. Moving a piece is a component
//! write - pure, idempotent, and history-independent. No occupancy or
//! legality model exists here.

use bevy::prelude::*;

use super::recipes::ShapeRecipe;
use crate::core::{ViewerSettings, ViewerState};
use crate::rendering::board::{create_board, Board, BoardLayout};
use crate::rendering::utils::BoardMaterials;

/// Height of the flat base token every piece stands on
pub const BASE_TOKEN_HEIGHT: f32 = 0.2;

#[derive(Clone, Copy, Debug, Component, PartialEq, Eq, Reflect, Default)]
#[reflect(Component)]
pub enum PieceColor {
    #[default]
    White,
    Black,
}

#[derive(Component, Clone, Copy, PartialEq, Eq, Debug, Reflect, Default)]
#[reflect(Component)]
pub enum PieceType {
    #[default]
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl PieceType {
    /// All piece types, in declaration order
    pub const ALL: [PieceType; 6] = [
        PieceType::King,
        PieceType::Queen,
        PieceType::Bishop,
        PieceType::Knight,
        PieceType::Rook,
        PieceType::Pawn,
    ];

    /// Stable index for per-type lookup tables
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            PieceType::King => "King",
            PieceType::Queen => "Queen",
            PieceType::Bishop => "Bishop",
            PieceType::Knight => "Knight",
            PieceType::Rook => "Rook",
            PieceType::Pawn => "Pawn",
        }
    }
}

/// Component carried by every piece root entity
#[derive(Component, Clone, Copy, Debug, Reflect)]
#[reflect(Component)]
pub struct Piece {
    pub color: PieceColor,
    pub piece_type: PieceType,
    pub x: u8,
    pub y: u8,
}

impl Piece {
    /// Reposition the piece to board coordinates `(x, y)`
    ///
    /// Pure coordinate write; the transform sync system derives the world
    /// position from it. Does not validate that `(x, y)` is on the board or
    /// unoccupied.
    pub fn move_to(&mut self, x: u8, y: u8) {
        self.x = x;
        self.y = y;
    }
}

/// Back-rank piece order, mirrored at rows 0 and 7
pub const BACK_ROW: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::King,
    PieceType::Queen,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// Container for the shared per-type mesh handles
#[derive(Resource)]
pub struct PieceMeshes {
    pub base: Handle<Mesh>,
    bodies: [Handle<Mesh>; 6],
    heads: [Handle<Mesh>; 6],
}

impl PieceMeshes {
    pub fn body(&self, piece_type: PieceType) -> Handle<Mesh> {
        self.bodies[piece_type.index()].clone()
    }

    pub fn head(&self, piece_type: PieceType) -> Handle<Mesh> {
        self.heads[piece_type.index()].clone()
    }
}

/// Builds the per-type piece meshes once from the recipe table
pub fn build_piece_meshes(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    layout: Res<BoardLayout>,
) {
    let bodies = PieceType::ALL.map(|t| meshes.add(ShapeRecipe::of(t).body_primitive()));
    let heads = PieceType::ALL.map(|t| meshes.add(ShapeRecipe::of(t).head_mesh()));

    commands.insert_resource(PieceMeshes {
        base: meshes.add(Cylinder::new(layout.piece_size / 2.0, BASE_TOKEN_HEIGHT)),
        bodies,
        heads,
    });
}

/// Spawns the 32 starting-position pieces as children of the board
///
/// Iterates the back-rank constant and a pawn rank once per color: white on
/// rows 0-1, black on rows 6-7, same file order on both sides.
pub fn create_pieces(
    mut commands: Commands,
    layout: Res<BoardLayout>,
    settings: Res<ViewerSettings>,
    materials: Res<BoardMaterials>,
    piece_meshes: Res<PieceMeshes>,
    board: Query<Entity, With<Board>>,
) {
    if !settings.show_pieces {
        info!("[PIECES] Piece spawning disabled in settings");
        return;
    }
    if layout.cells_count != 8 {
        warn!(
            "[PIECES] Starting layout needs an 8x8 board, got {}x{}; skipping pieces",
            layout.cells_count, layout.cells_count
        );
        return;
    }
    let Ok(board) = board.single() else {
        warn!("[PIECES] No board to attach pieces to; skipping pieces");
        return;
    };

    for (file, &piece_type) in BACK_ROW.iter().enumerate() {
        spawn_piece(
            &mut commands,
            board,
            &piece_meshes,
            materials.light_piece.clone(),
            PieceColor::White,
            piece_type,
            (file as u8, 0),
            &layout,
        );
        spawn_piece(
            &mut commands,
            board,
            &piece_meshes,
            materials.dark_piece.clone(),
            PieceColor::Black,
            piece_type,
            (file as u8, 7),
            &layout,
        );
    }

    for file in 0..8u8 {
        spawn_piece(
            &mut commands,
            board,
            &piece_meshes,
            materials.light_piece.clone(),
            PieceColor::White,
            PieceType::Pawn,
            (file, 1),
            &layout,
        );
        spawn_piece(
            &mut commands,
            board,
            &piece_meshes,
            materials.dark_piece.clone(),
            PieceColor::Black,
            PieceType::Pawn,
            (file, 6),
            &layout,
        );
    }

    info!("[PIECES] Spawned 32 pieces in starting position");
}

/// Spawns one piece: root entity plus base/body/head mesh children
#[allow(clippy::too_many_arguments)]
pub fn spawn_piece(
    commands: &mut Commands,
    board: Entity,
    meshes: &PieceMeshes,
    material: Handle<StandardMaterial>,
    color: PieceColor,
    piece_type: PieceType,
    position: (u8, u8),
    layout: &BoardLayout,
) -> Entity {
    let recipe = ShapeRecipe::of(piece_type);
    let center = layout.square_center(position.0, position.1);

    commands
        .spawn((
            Transform::from_xyz(center.x, layout.piece_rest_height(), center.z),
            Visibility::Inherited,
            Name::new(piece_name(piece_type, color, position)),
            Piece {
                color,
                piece_type,
                x: position.0,
                y: position.1,
            },
            ChildOf(board),
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(meshes.base.clone()),
                MeshMaterial3d(material.clone()),
                Transform::IDENTITY,
                Name::new("Base"),
            ));
            parent.spawn((
                Mesh3d(meshes.body(piece_type)),
                MeshMaterial3d(material.clone()),
                Transform::from_xyz(0.0, recipe.body_height / 2.0, 0.0),
                Name::new("Body"),
            ));
            parent.spawn((
                Mesh3d(meshes.head(piece_type)),
                MeshMaterial3d(material),
                Transform::from_xyz(0.0, recipe.head_offset(), 0.0),
                Name::new("Head"),
            ));
        })
        .id()
}

/// Derives a piece's world position from its board coordinates
///
/// Runs on any changed (or newly added) [`Piece`]. Only the horizontal
/// coordinates are written; vertical position stays at the construction-time
/// resting height.
pub fn sync_piece_transforms(
    layout: Res<BoardLayout>,
    mut pieces: Query<(&Piece, &mut Transform), Changed<Piece>>,
) {
    for (piece, mut transform) in pieces.iter_mut() {
        let center = layout.square_center(piece.x, piece.y);
        transform.translation.x = center.x;
        transform.translation.z = center.z;
    }
}

/// Helper to generate a piece name for logs and the inspector
fn piece_name(piece_type: PieceType, color: PieceColor, position: (u8, u8)) -> String {
    let color_str = match color {
        PieceColor::White => "White",
        PieceColor::Black => "Black",
    };
    let file = (b'a' + position.0 % 26) as char;
    let rank = position.1 as u32 + 1;
    format!("{} {} {}{}", color_str, piece_type.name(), file, rank)
}

pub struct PiecePlugin;

impl Plugin for PiecePlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Piece>()
            .register_type::<PieceColor>()
            .register_type::<PieceType>();
        app.add_systems(Startup, build_piece_meshes);
        app.add_systems(
            OnEnter(ViewerState::Viewing),
            create_pieces.after(create_board),
        );
        app.add_systems(
            Update,
            sync_piece_transforms.run_if(in_state(ViewerState::Viewing)),
        );
    }
}
