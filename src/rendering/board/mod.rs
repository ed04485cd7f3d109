//! Board submodule - slab, cells and board-space geometry

pub mod board;
pub mod coordinates;
pub mod theme;

pub use board::{create_board, Board, BoardPlugin};
pub use coordinates::BoardLayout;
pub use theme::apply_board_theme;
