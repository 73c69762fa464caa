//! # Coordinates Module
//!
//! Value types locating chunks and blocks, and the mapping from continuous world
//! positions to block cells.
//!
//! A world position is first scaled by the block edge length, then each axis is floored
//! to an integer cell. The x and z cells are split into a chunk coordinate and a local
//! offset with Euclidean division, so negative positions land in negative chunks:
//!
//! ```
//! use cgmath::Point3;
//! use voxel_world::{BlockCoordinate, ChunkCoordinate, WorldConfig};
//!
//! let config = WorldConfig::default();
//! let block = BlockCoordinate::from_world_position(Point3::new(-1.0, 5.5, 17.0), &config);
//! assert_eq!(block.chunk, ChunkCoordinate::new(-1, 1));
//! assert_eq!((block.x, block.y, block.z), (15, 5, 1));
//! ```

use cgmath::Point3;
use serde::{Deserialize, Serialize};

use crate::config::{ChunkLayout, WorldConfig};

/// Position of a chunk on the horizontal chunk grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChunkCoordinate {
    /// Chunk index along world x.
    pub x: i32,
    /// Chunk index along world z.
    pub z: i32,
}

impl ChunkCoordinate {
    /// Creates a chunk coordinate.
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// The chunk `dx` and `dz` steps away from this one.
    pub const fn offset(self, dx: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.z + dz)
    }

    /// World-space position of this chunk's origin corner.
    pub fn world_origin(self, config: &WorldConfig) -> Point3<f32> {
        self.world_origin_in(&config.chunk_layout())
    }

    /// [`world_origin`](Self::world_origin) for a chunk that only carries its layout.
    pub fn world_origin_in(self, layout: &ChunkLayout) -> Point3<f32> {
        let span = layout.width as f32 * layout.block_length;
        Point3::new(self.x as f32 * span, 0.0, self.z as f32 * span)
    }
}

/// A block cell: the owning chunk plus the local offset inside it.
///
/// `is_null` marks "no block targeted" (for example, a look-at query that hit nothing).
/// It is unrelated to [`BlockType::None`](super::block::block_type::BlockType::None),
/// which is a query *result*.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockCoordinate {
    /// The chunk owning the cell.
    pub chunk: ChunkCoordinate,
    /// Local x in `[0, chunk_width)`.
    pub x: i32,
    /// Row; inside `[0, chunk_height)` for cells that exist.
    pub y: i32,
    /// Local z in `[0, chunk_width)`.
    pub z: i32,
    /// Set when no block is targeted.
    pub is_null: bool,
}

impl BlockCoordinate {
    /// Creates a non-null block coordinate.
    pub const fn new(chunk: ChunkCoordinate, x: i32, y: i32, z: i32) -> Self {
        Self {
            chunk,
            x,
            y,
            z,
            is_null: false,
        }
    }

    /// The "nothing targeted" coordinate.
    pub const fn null() -> Self {
        Self {
            chunk: ChunkCoordinate::new(0, 0),
            x: 0,
            y: 0,
            z: 0,
            is_null: true,
        }
    }

    /// Maps a world position to the block cell containing it.
    pub fn from_world_position(position: Point3<f32>, config: &WorldConfig) -> Self {
        let mut block = Self::null();
        block.set_from_world_position(position, config);
        block
    }

    /// In-place form of [`from_world_position`](Self::from_world_position), for call
    /// sites that keep one coordinate around and refresh it every frame. Clears `is_null`.
    pub fn set_from_world_position(&mut self, position: Point3<f32>, config: &WorldConfig) {
        let (cx, cz, x, y, z) = split_world_position(position, config);
        self.set_chunk(cx, cz);
        self.set_local(x, y, z);
        self.is_null = false;
    }

    /// Replaces the chunk coordinate.
    pub fn set_chunk(&mut self, x: i32, z: i32) {
        self.chunk = ChunkCoordinate::new(x, z);
    }

    /// Replaces the local offset.
    pub fn set_local(&mut self, x: i32, y: i32, z: i32) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Absolute integer cell of this block in the world grid.
    ///
    /// Saturates at the `i32` range; cells from
    /// [`from_world_position`](Self::from_world_position) always recombine exactly.
    pub fn world_cell(&self, config: &WorldConfig) -> (i32, i32, i32) {
        let width = config.chunk_width;
        (
            self.chunk.x.saturating_mul(width).saturating_add(self.x),
            self.y,
            self.chunk.z.saturating_mul(width).saturating_add(self.z),
        )
    }

    /// World-space position of the cell's minimum corner.
    pub fn to_world_position(&self, config: &WorldConfig) -> Point3<f32> {
        let (x, y, z) = self.world_cell(config);
        Point3::new(x as f32, y as f32, z as f32) * config.block_length
    }
}

fn split_world_position(position: Point3<f32>, config: &WorldConfig) -> (i32, i32, i32, i32, i32) {
    let scaled = position / config.block_length;
    let x = scaled.x.floor() as i32;
    let y = scaled.y.floor() as i32;
    let z = scaled.z.floor() as i32;
    let width = config.chunk_width;

    (
        x.div_euclid(width),
        z.div_euclid(width),
        x.rem_euclid(width),
        y,
        z.rem_euclid(width),
    )
}
