//! Piece submodule - procedural piece assembly and placement

pub mod pieces;
pub mod recipes;

pub use pieces::*;
pub use recipes::{HeadShape, ShapeRecipe};
