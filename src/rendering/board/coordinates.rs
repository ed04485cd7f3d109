//! Board-space geometry
//!
//! One formula maps grid coordinates to world space for everything on the
//! board. Cell `(i, j)` sits at
//!
//! ```text
//! x = i·cell_size − (cells_count − 1)·cell_size / 2
//! z = j·cell_size − (cells_count − 1)·cell_size / 2
//! ```
//!
//! which centers the full grid on the board origin. Cells rest at
//! `y = board_height` (on top of the base slab); piece roots rest at
//! `y = 2·board_height` (their base token sits on the cell tops).

use bevy::prelude::*;

use crate::core::{ViewerError, ViewerResult};

/// Resource describing the board's dimensions
///
/// Constructed either with [`BoardLayout::new`], which enforces the valid
/// domain, or via `Default` for the standard 8×8 board.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct BoardLayout {
    /// Cells per side of the grid
    pub cells_count: u8,
    /// Side length of one cell
    pub cell_size: f32,
    /// Thickness of the base slab and of each cell
    pub board_height: f32,
    /// Diameter of a piece's base token
    pub piece_size: f32,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            cells_count: 8,
            cell_size: 1.0,
            board_height: 0.2,
            piece_size: 0.6,
        }
    }
}

impl BoardLayout {
    /// Create a layout, validating the input domain
    ///
    /// Requires `cells_count ≥ 1` and strictly positive sizes.
    pub fn new(
        cells_count: u8,
        cell_size: f32,
        board_height: f32,
        piece_size: f32,
    ) -> ViewerResult<Self> {
        if cells_count == 0 {
            return Err(ViewerError::InvalidLayout {
                message: "cells_count must be at least 1".to_string(),
            });
        }
        if !(cell_size > 0.0) {
            return Err(ViewerError::InvalidLayout {
                message: format!("cell_size must be positive, got {cell_size}"),
            });
        }
        if !(board_height > 0.0) {
            return Err(ViewerError::InvalidLayout {
                message: format!("board_height must be positive, got {board_height}"),
            });
        }
        if !(piece_size > 0.0) {
            return Err(ViewerError::InvalidLayout {
                message: format!("piece_size must be positive, got {piece_size}"),
            });
        }
        Ok(Self {
            cells_count,
            cell_size,
            board_height,
            piece_size,
        })
    }

    /// Full side length of the board
    pub fn board_span(&self) -> f32 {
        self.cells_count as f32 * self.cell_size
    }

    /// Distance from the board origin to the center of a corner cell
    pub fn half_extent(&self) -> f32 {
        (self.cells_count - 1) as f32 * self.cell_size / 2.0
    }

    /// World-space center of cell `(x, y)`, at cell resting height
    pub fn square_center(&self, x: u8, y: u8) -> Vec3 {
        Vec3::new(
            x as f32 * self.cell_size - self.half_extent(),
            self.board_height,
            y as f32 * self.cell_size - self.half_extent(),
        )
    }

    /// Resting height of a piece root (its base token center)
    pub fn piece_rest_height(&self) -> f32 {
        2.0 * self.board_height
    }
}
