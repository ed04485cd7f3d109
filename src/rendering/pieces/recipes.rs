//! Shape recipes - per-type piece geometry as data
//!
//! Every piece is the same three-part assembly: a flat base token, a
//! tapered body, and a head accessory. Only the dimensions and the head
//! shape vary by type, so the variation lives in a lookup table instead of
//! a six-way spawn branch. Adding a piece type is a data change.
//!
//! | Type   | Body height | Body diam (top/bottom) | Head            |
//! |--------|-------------|------------------------|-----------------|
//! | King   | 1.0         | 0.2 / 0.5              | sphere 0.3      |
//! | Queen  | 1.0         | 0.1 / 0.5              | sphere 0.3      |
//! | Bishop | 0.7         | 0.2 / 0.5              | cone 0.3 base   |
//! | Knight | 0.8         | 0.1 / 0.5              | sphere 0.3      |
//! | Rook   | 0.7         | 0.3 / 0.5              | cylinder 0.4    |
//! | Pawn   | 0.6         | 0.1 / 0.5              | sphere 0.3      |

use bevy::prelude::*;

use super::pieces::PieceType;

/// Head accessory geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeadShape {
    /// Ball sitting on the body top
    Sphere { diameter: f32 },
    /// Tapered tip whose base rests on the body top
    Cone { base_diameter: f32, height: f32 },
    /// Squat disc capping the body
    Cylinder { diameter: f32, height: f32 },
}

/// Fixed geometry for one piece type: body taper plus head accessory
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeRecipe {
    pub body_height: f32,
    pub body_diameter_top: f32,
    pub body_diameter_bottom: f32,
    pub head: HeadShape,
}

impl ShapeRecipe {
    /// The recipe for a piece type
    ///
    /// Exhaustive over [`PieceType`]; an unknown type is unrepresentable.
    pub const fn of(piece_type: PieceType) -> Self {
        match piece_type {
            PieceType::King => Self {
                body_height: 1.0,
                body_diameter_top: 0.2,
                body_diameter_bottom: 0.5,
                head: HeadShape::Sphere { diameter: 0.3 },
            },
            PieceType::Queen => Self {
                body_height: 1.0,
                body_diameter_top: 0.1,
                body_diameter_bottom: 0.5,
                head: HeadShape::Sphere { diameter: 0.3 },
            },
            PieceType::Bishop => Self {
                body_height: 0.7,
                body_diameter_top: 0.2,
                body_diameter_bottom: 0.5,
                head: HeadShape::Cone {
                    base_diameter: 0.3,
                    height: 0.4,
                },
            },
            PieceType::Knight => Self {
                body_height: 0.8,
                body_diameter_top: 0.1,
                body_diameter_bottom: 0.5,
                head: HeadShape::Sphere { diameter: 0.3 },
            },
            PieceType::Rook => Self {
                body_height: 0.7,
                body_diameter_top: 0.3,
                body_diameter_bottom: 0.5,
                head: HeadShape::Cylinder {
                    diameter: 0.4,
                    height: 0.2,
                },
            },
            PieceType::Pawn => Self {
                body_height: 0.6,
                body_diameter_top: 0.1,
                body_diameter_bottom: 0.5,
                head: HeadShape::Sphere { diameter: 0.3 },
            },
        }
    }

    /// Body primitive: a tapered cylinder
    pub fn body_primitive(&self) -> ConicalFrustum {
        ConicalFrustum {
            radius_top: self.body_diameter_top / 2.0,
            radius_bottom: self.body_diameter_bottom / 2.0,
            height: self.body_height,
        }
    }

    /// Head mesh built from the recipe's head shape
    pub fn head_mesh(&self) -> Mesh {
        match self.head {
            HeadShape::Sphere { diameter } => Sphere::new(diameter / 2.0).into(),
            HeadShape::Cone {
                base_diameter,
                height,
            } => Cone {
                radius: base_diameter / 2.0,
                height,
            }
            .into(),
            HeadShape::Cylinder { diameter, height } => {
                Cylinder::new(diameter / 2.0, height).into()
            }
        }
    }

    /// Head center height above the piece base
    ///
    /// Spheres and cylinders are centered at the body top; a cone is lifted
    /// by half its own height so its base rests on the body top.
    pub fn head_offset(&self) -> f32 {
        match self.head {
            HeadShape::Cone { height, .. } => self.body_height + height / 2.0,
            _ => self.body_height,
        }
    }
}
