//! # Block Side Module
//!
//! This module defines the six faces of a voxel block and the direction each one faces.

/// Represents the six possible faces of a voxel block.
///
/// The order is: [FRONT, BACK, BOTTOM, TOP, LEFT, RIGHT]
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum BlockSide {
    /// The front face (facing positive Z)
    Front = 0,

    /// The back face (facing negative Z)
    Back = 1,

    /// The bottom face (facing negative Y)
    Bottom = 2,

    /// The top face (facing positive Y)
    Top = 3,

    /// The left face (facing negative X)
    Left = 4,

    /// The right face (facing positive X)
    Right = 5,
}

impl BlockSide {
    /// Returns an array containing all six block faces in a consistent order.
    pub fn all() -> [BlockSide; 6] {
        [
            BlockSide::Front,
            BlockSide::Back,
            BlockSide::Bottom,
            BlockSide::Top,
            BlockSide::Left,
            BlockSide::Right,
        ]
    }

    /// Offset from a block to the neighbour this face looks at.
    pub fn offset(self) -> (i32, i32, i32) {
        match self {
            BlockSide::Front => (0, 0, 1),
            BlockSide::Back => (0, 0, -1),
            BlockSide::Bottom => (0, -1, 0),
            BlockSide::Top => (0, 1, 0),
            BlockSide::Left => (-1, 0, 0),
            BlockSide::Right => (1, 0, 0),
        }
    }
}
