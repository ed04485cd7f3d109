//! Integration tests for piece construction and placement
//!
//! Spawns the full 32-piece starting position in headless apps and checks
//! the layout invariants, the composite piece hierarchy, and the purity of
//! the repositioning contract.

use std::collections::HashSet;

use bevy::prelude::*;
use boardscape::core::ViewerSettings;
use boardscape::rendering::{
    build_piece_meshes, create_board, create_pieces, sync_piece_transforms, Board, BoardLayout,
    BoardMaterials, Piece, PieceColor, PieceType, BACK_ROW,
};

/// Headless app that builds the board and the 32 starting pieces
fn scene_app() -> App {
    scene_app_with(ViewerSettings::default())
}

fn scene_app_with(settings: ViewerSettings) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(Assets::<Mesh>::default());
    app.insert_resource(Assets::<StandardMaterial>::default());
    app.insert_resource(settings);
    app.init_resource::<BoardLayout>();
    app.init_resource::<BoardMaterials>();
    app.add_systems(
        Startup,
        (build_piece_meshes, create_board, create_pieces).chain(),
    );
    app.add_systems(Update, sync_piece_transforms);
    app.update();
    app
}

fn all_pieces(app: &mut App) -> Vec<Piece> {
    let mut query = app.world_mut().query::<&Piece>();
    query.iter(app.world()).copied().collect()
}

fn board_entity(app: &mut App) -> Entity {
    let mut query = app.world_mut().query_filtered::<Entity, With<Board>>();
    query.single(app.world()).unwrap()
}

fn find_piece(app: &mut App, color: PieceColor, x: u8, y: u8) -> Entity {
    let mut query = app.world_mut().query::<(Entity, &Piece)>();
    query
        .iter(app.world())
        .find(|(_, p)| p.color == color && p.x == x && p.y == y)
        .map(|(entity, _)| entity)
        .unwrap()
}

#[test]
fn test_exactly_32_pieces_spawned() {
    let mut app = scene_app();
    assert_eq!(all_pieces(&mut app).len(), 32);
}

#[test]
fn test_16_pieces_per_color() {
    let mut app = scene_app();
    let pieces = all_pieces(&mut app);
    let white = pieces.iter().filter(|p| p.color == PieceColor::White).count();
    let black = pieces.iter().filter(|p| p.color == PieceColor::Black).count();
    assert_eq!(white, 16);
    assert_eq!(black, 16);
}

#[test]
fn test_pieces_occupy_distinct_valid_squares() {
    //! 32 pieces on 32 distinct squares, all within the 8x8 grid

    let mut app = scene_app();
    let pieces = all_pieces(&mut app);

    let squares: HashSet<(u8, u8)> = pieces.iter().map(|p| (p.x, p.y)).collect();
    assert_eq!(squares.len(), 32);
    for (x, y) in &squares {
        assert!(*x < 8 && *y < 8);
    }
}

#[test]
fn test_starting_rows() {
    //! White occupies rows 0-1, black rows 6-7; pawns fill rows 1 and 6

    let mut app = scene_app();
    for piece in all_pieces(&mut app) {
        match piece.color {
            PieceColor::White => assert!(piece.y <= 1),
            PieceColor::Black => assert!(piece.y >= 6),
        }
        if piece.y == 1 || piece.y == 6 {
            assert_eq!(piece.piece_type, PieceType::Pawn);
        } else {
            assert_ne!(piece.piece_type, PieceType::Pawn);
        }
    }
}

#[test]
fn test_back_rank_order_matches_layout() {
    //! Both back ranks run Rook-Knight-Bishop-King-Queen-Bishop-Knight-Rook
    //! in the same file order

    let mut app = scene_app();
    let pieces = all_pieces(&mut app);

    for row in [0u8, 7u8] {
        let mut rank: Vec<&Piece> = pieces.iter().filter(|p| p.y == row).collect();
        rank.sort_by_key(|p| p.x);
        assert_eq!(rank.len(), 8);
        for (file, piece) in rank.iter().enumerate() {
            assert_eq!(
                piece.piece_type, BACK_ROW[file],
                "row {} file {}",
                row, file
            );
        }
    }
}

#[test]
fn test_piece_roots_rest_on_the_board() {
    //! Piece roots sit at the square center horizontally and at the resting
    //! height vertically

    let mut app = scene_app();
    let layout = *app.world().resource::<BoardLayout>();

    let mut query = app.world_mut().query::<(&Piece, &Transform)>();
    for (piece, transform) in query.iter(app.world()) {
        let center = layout.square_center(piece.x, piece.y);
        assert_eq!(transform.translation.x, center.x);
        assert_eq!(transform.translation.z, center.z);
        assert_eq!(transform.translation.y, layout.piece_rest_height());
    }
}

#[test]
fn test_pieces_are_children_of_the_board() {
    //! The board owns cells and pieces: 64 + 32 children

    let mut app = scene_app();
    let board = board_entity(&mut app);

    let children = app.world().get::<Children>(board).unwrap();
    assert_eq!(children.len(), 96);
}

#[test]
fn test_piece_parts_share_one_material() {
    //! Each piece owns base/body/head children, all with the piece color's
    //! shared material handle

    let mut app = scene_app();

    let (light_piece, dark_piece) = {
        let materials = app.world().resource::<BoardMaterials>();
        (materials.light_piece.clone(), materials.dark_piece.clone())
    };

    let roots: Vec<(Entity, PieceColor)> = {
        let mut query = app.world_mut().query::<(Entity, &Piece)>();
        query
            .iter(app.world())
            .map(|(entity, piece)| (entity, piece.color))
            .collect()
    };

    for (root, color) in roots {
        let children = app.world().get::<Children>(root).unwrap();
        assert_eq!(children.len(), 3, "base, body and head");

        let expected = match color {
            PieceColor::White => &light_piece,
            PieceColor::Black => &dark_piece,
        };
        for i in 0..children.len() {
            let child = children[i];
            let material = app
                .world()
                .get::<MeshMaterial3d<StandardMaterial>>(child)
                .unwrap();
            assert_eq!(&material.0, expected);
        }
    }
}

#[test]
fn test_move_to_repositions_the_piece() {
    //! move_to followed by a frame puts the piece at the target square,
    //! leaving its height untouched

    let mut app = scene_app();
    let layout = *app.world().resource::<BoardLayout>();
    let pawn = find_piece(&mut app, PieceColor::White, 0, 1);

    app.world_mut().get_mut::<Piece>(pawn).unwrap().move_to(4, 4);
    app.update();

    let transform = *app.world().get::<Transform>(pawn).unwrap();
    let center = layout.square_center(4, 4);
    assert_eq!(transform.translation.x, center.x);
    assert_eq!(transform.translation.z, center.z);
    assert_eq!(transform.translation.y, layout.piece_rest_height());
}

#[test]
fn test_move_to_is_idempotent() {
    //! Repeating a move with the same arguments leaves the piece in place

    let mut app = scene_app();
    let pawn = find_piece(&mut app, PieceColor::White, 3, 1);

    app.world_mut().get_mut::<Piece>(pawn).unwrap().move_to(5, 3);
    app.update();
    let first = *app.world().get::<Transform>(pawn).unwrap();

    app.world_mut().get_mut::<Piece>(pawn).unwrap().move_to(5, 3);
    app.update();
    let second = *app.world().get::<Transform>(pawn).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_move_to_is_history_independent() {
    //! The final position depends only on the last move's arguments

    let mut app = scene_app();
    let pawn = find_piece(&mut app, PieceColor::White, 6, 1);

    app.world_mut().get_mut::<Piece>(pawn).unwrap().move_to(2, 2);
    app.update();
    app.world_mut().get_mut::<Piece>(pawn).unwrap().move_to(7, 5);
    app.update();
    let via_detour = *app.world().get::<Transform>(pawn).unwrap();

    let pawn2 = find_piece(&mut app, PieceColor::White, 1, 1);
    app.world_mut().get_mut::<Piece>(pawn2).unwrap().move_to(7, 5);
    app.update();
    let direct = *app.world().get::<Transform>(pawn2).unwrap();

    assert_eq!(via_detour.translation.x, direct.translation.x);
    assert_eq!(via_detour.translation.z, direct.translation.z);
}

#[test]
fn test_show_pieces_disabled_spawns_none() {
    //! The board-only variant builds the board but no pieces

    let mut app = scene_app_with(ViewerSettings {
        show_pieces: false,
        ..Default::default()
    });

    assert_eq!(all_pieces(&mut app).len(), 0);

    let board = board_entity(&mut app);
    let children = app.world().get::<Children>(board).unwrap();
    assert_eq!(children.len(), 64);
}
