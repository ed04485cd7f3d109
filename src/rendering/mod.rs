//! Rendering module - scene construction on Bevy's 3D pipeline
//!
//! Everything visible lives here:
//!
//! - `board` - base slab, cell grid, and board-space geometry
//! - `pieces` - procedural piece assembly from engine primitives
//! - `camera` - the configurable orbit/fixed camera
//! - `resize` - debounced window-resize handling
//! - `utils` - cell component and shared materials
//!
//! The scene graph is an owning tree: cells and pieces are children of the
//! board entity, and each piece's base/body/head meshes are children of its
//! root. Nothing outlives its parent.
//!
//! Meshes and materials are shared by handle wherever geometry repeats: one
//! cell mesh for all cells, one mesh per piece part per type, one material
//! per cell parity and per piece color.

pub mod board;
pub mod camera;
pub mod pieces;
pub mod resize;
pub mod utils;

pub use board::*;
pub use camera::*;
pub use pieces::*;
pub use resize::*;
pub use utils::*;
