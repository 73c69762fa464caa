//! Errors for block edits and the inventory-driven edit flows.

use thiserror::Error;

use super::voxels::{block::block_type::BlockType, coordinates::ChunkCoordinate};

/// Why a block edit was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditError {
    /// The target coordinate is the "nothing targeted" value.
    #[error("no block is targeted")]
    NullTarget,
    /// No chunk is loaded at the target's chunk coordinate.
    #[error("no chunk at {0:?}")]
    ChunkNotFound(ChunkCoordinate),
    /// The local coordinate does not address a cell of the chunk.
    #[error("local block ({x}, {y}, {z}) is outside the chunk")]
    OutOfBounds {
        /// Local x.
        x: i32,
        /// Local y.
        y: i32,
        /// Local z.
        z: i32,
    },
    /// The block type cannot be written into the grid.
    #[error("{0:?} cannot be placed")]
    UnplaceableBlock(BlockType),
    /// The selected quick slot holds nothing.
    #[error("quick slot {0} is empty")]
    EmptyQuickSlot(usize),
    /// A player is standing in the target cell.
    #[error("a player occupies the target block")]
    OccupiedByPlayer,
}
