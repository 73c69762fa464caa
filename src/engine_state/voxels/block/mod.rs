//! # Block Module
//!
//! Block kinds, block faces, and the texture lookup the mesh builder uses.

use block_side::BlockSide;
use block_type::BlockType;

pub mod block_side;
pub mod block_type;

/// Maps each solid block type to its texture indices for each face.
///
/// Indexed by `BlockType as usize - 2` (the first solid kind).
/// The inner array follows `BlockSide` order:
/// [Front, Back, Bottom, Top, Left, Right]
pub static BLOCK_TYPE_TO_TEXTURE_INDICES: [[u32; 6]; 4] = [
    [1, 1, 1, 1, 1, 1], // DIRT (all sides use texture 1)
    [2, 2, 1, 3, 2, 2], // GRASS (top: 3, bottom: 1, sides: 2)
    [5, 5, 5, 5, 5, 5], // STONE
    [0, 0, 0, 0, 0, 0], // WOOD
];

/// Gets the texture index for one face of a block.
///
/// Non-solid blocks are never meshed and map to texture 0.
pub fn texture_index(block_type: BlockType, side: BlockSide) -> u32 {
    if !block_type.is_solid() {
        return 0;
    }
    BLOCK_TYPE_TO_TEXTURE_INDICES[block_type as usize - BlockType::Dirt as usize][side as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grass_top_differs_from_sides() {
        assert_eq!(texture_index(BlockType::Grass, BlockSide::Top), 3);
        assert_eq!(texture_index(BlockType::Grass, BlockSide::Left), 2);
        assert_eq!(texture_index(BlockType::Grass, BlockSide::Bottom), 1);
    }

    #[test]
    fn every_solid_type_has_a_row() {
        for block in BlockType::SOLID {
            for side in BlockSide::all() {
                let _ = texture_index(block, side);
            }
        }
        assert_eq!(texture_index(BlockType::Air, BlockSide::Top), 0);
    }
}
