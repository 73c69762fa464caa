use cgmath::Point3;

use crate::engine_state::voxels::block::{block_side::BlockSide, block_type::BlockType};

/// Represents a single quad face of a voxel in the mesh.
///
/// A face belongs to one solid cell and one of its six sides. Its four corners
/// (lower-left, lower-right, upper-left, upper-right) are laid out so that, seen from
/// outside the block, lower-left → lower-right → upper-right turns counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    /// Local cell the face belongs to
    pub position: Point3<i32>,
    /// The block type, used for texture lookup
    pub block_type: BlockType,
    /// Which side of the block this face represents
    pub block_side: BlockSide,
}

impl Face {
    /// Creates a new face for the cell at local `(i, j, k)`.
    pub fn new(i: i32, j: i32, k: i32, block_type: BlockType, block_side: BlockSide) -> Self {
        Face {
            position: Point3::new(i, j, k),
            block_type,
            block_side,
        }
    }

    /// The four corners in `[ll, lr, ul, ur]` order, in chunk-local world units.
    pub fn corners(&self, block_length: f32) -> [Point3<f32>; 4] {
        let (i, j, k) = (self.position.x, self.position.y, self.position.z);
        let cells = match self.block_side {
            BlockSide::Front => [
                (i, j, k + 1),
                (i + 1, j, k + 1),
                (i, j + 1, k + 1),
                (i + 1, j + 1, k + 1),
            ],
            BlockSide::Back => [
                (i + 1, j, k),
                (i, j, k),
                (i + 1, j + 1, k),
                (i, j + 1, k),
            ],
            BlockSide::Bottom => [
                (i, j, k),
                (i + 1, j, k),
                (i, j, k + 1),
                (i + 1, j, k + 1),
            ],
            BlockSide::Top => [
                (i, j + 1, k + 1),
                (i + 1, j + 1, k + 1),
                (i, j + 1, k),
                (i + 1, j + 1, k),
            ],
            BlockSide::Left => [
                (i, j, k),
                (i, j, k + 1),
                (i, j + 1, k),
                (i, j + 1, k + 1),
            ],
            BlockSide::Right => [
                (i + 1, j, k + 1),
                (i + 1, j, k),
                (i + 1, j + 1, k + 1),
                (i + 1, j + 1, k),
            ],
        };

        cells.map(|(x, y, z)| {
            Point3::new(
                x as f32 * block_length,
                y as f32 * block_length,
                z as f32 * block_length,
            )
        })
    }
}
