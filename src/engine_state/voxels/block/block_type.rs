//! # Block Type Module
//!
//! This module defines the kinds of cell a chunk grid can hold, plus the sentinel
//! returned for cells no loaded chunk owns.

use serde::{Deserialize, Serialize};

/// Enumerates every value a block query can produce.
///
/// `None` and `Air` are both non-solid for face culling, but they mean different
/// things: `Air` is a known empty cell, `None` means no data exists there (outside the
/// allocated grid, or below the world).
#[repr(u8)]
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum BlockType {
    /// No data: outside every loaded chunk, or below `y = 0`.
    #[default]
    None,

    /// Known empty space.
    Air,

    /// Plain dirt, the bulk of generated terrain.
    Dirt,

    /// Dirt with a grass top; the surface row of generated terrain.
    Grass,

    /// Stone.
    Stone,

    /// A wooden block with a bark texture on all sides.
    Wood,
}

impl BlockType {
    /// Every solid block kind, in discriminant order.
    pub const SOLID: [BlockType; 4] = [
        BlockType::Dirt,
        BlockType::Grass,
        BlockType::Stone,
        BlockType::Wood,
    ];

    /// Whether this block hides the faces of blocks next to it.
    #[inline]
    pub fn is_solid(self) -> bool {
        !matches!(self, BlockType::None | BlockType::Air)
    }

    /// Picks a random solid block type.
    pub fn get_random_type() -> Self {
        Self::SOLID[fastrand::usize(..Self::SOLID.len())]
    }
}
