//! # Chunk Module
//!
//! This module provides the `Chunk` struct: one chunk footprint's worth of block data,
//! stored densely, plus the face-culled mesh built from it.
//!
//! ## Storage
//!
//! Blocks live in one flat `Vec<BlockType>` indexed by `x + width * (y + height * z)`.
//! Every mesh rebuild visits every cell and probes six neighbours, so the grid is kept
//! contiguous rather than sparse.
//!
//! ## Neighbour queries
//!
//! A chunk never stores copies of its neighbours' boundary cells. When a query leaves
//! the chunk's x/z footprint it is forwarded, one step, to a [`BlockQuery`] supplied by
//! the caller (normally the chunk manager), which answers from the neighbouring chunk's
//! live data.

use cgmath::Point3;
use log::trace;

use crate::config::ChunkLayout;
use crate::engine_state::rendering::{
    meshing::mesh::ChunkMesh,
    mesh_sink::{MeshSink, MeshUpload, SurfaceTag},
};

use super::block::block_type::BlockType;
use super::coordinates::ChunkCoordinate;

mod chunk_creation;
pub mod chunk_iteration;

pub use chunk_creation::{FlatHeight, HeightFunction, PerlinHeight, TerrainGenerator};

/// Resolves blocks that belong to chunks other than the one asking.
pub trait BlockQuery {
    /// Block at local `(x, y, z)` of the chunk at `chunk`, or `BlockType::None` when no
    /// such chunk exists. Implementations answer from that chunk alone and never forward
    /// the query again.
    fn block_type_at(&self, chunk: ChunkCoordinate, x: i32, y: i32, z: i32) -> BlockType;
}

/// A [`BlockQuery`] with no loaded neighbours: everything outside resolves to `None`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoNeighbors;

impl BlockQuery for NoNeighbors {
    fn block_type_at(&self, _chunk: ChunkCoordinate, _x: i32, _y: i32, _z: i32) -> BlockType {
        BlockType::None
    }
}

/// What a block removal reports back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRemoval {
    /// The block that was in the cell before it became air.
    pub previous: BlockType,
    /// Whether the cell touches the chunk's x/z boundary.
    pub on_edge: bool,
}

/// One chunk of the world grid.
///
/// Chunks are the unit of storage and of mesh rebuilds. A chunk keeps the coordinate it
/// was bound to for its whole life.
pub struct Chunk {
    /// Position of this chunk on the chunk grid.
    position: ChunkCoordinate,

    /// Footprint and meshing policy.
    layout: ChunkLayout,

    /// Dense block grid, `layout.volume()` cells.
    blocks: Vec<BlockType>,

    /// Material and layer the mesh is published with.
    surface: SurfaceTag,

    /// The most recently built mesh.
    mesh: ChunkMesh,

    /// Number of mesh rebuilds so far.
    mesh_revision: u64,
}

impl Chunk {
    /// Creates a new, completely empty chunk (all blocks are air).
    pub fn empty(position: ChunkCoordinate, layout: ChunkLayout) -> Self {
        Self::filled(position, layout, BlockType::Air)
    }

    /// Creates a new chunk filled with solid blocks (for testing).
    pub fn solid(position: ChunkCoordinate, layout: ChunkLayout) -> Self {
        Self::filled(position, layout, BlockType::Dirt)
    }

    /// Creates a new chunk with a 3D checkerboard pattern (for testing).
    ///
    /// A cell is solid when `x + y + z` is even, so no two solid cells share a face.
    pub fn checkerboard(position: ChunkCoordinate, layout: ChunkLayout) -> Self {
        let mut chunk = Self::empty(position, layout);
        for z in 0..layout.width {
            for y in 0..layout.height {
                for x in 0..layout.width {
                    if (x + y + z) % 2 == 0 {
                        let index = chunk.index(x, y, z);
                        chunk.blocks[index] = BlockType::Dirt;
                    }
                }
            }
        }
        chunk
    }

    fn filled(position: ChunkCoordinate, layout: ChunkLayout, block_type: BlockType) -> Self {
        Chunk {
            position,
            layout,
            blocks: vec![block_type; layout.volume()],
            surface: SurfaceTag::default(),
            mesh: ChunkMesh::default(),
            mesh_revision: 0,
        }
    }

    /// Sets the material and layer this chunk's mesh is published with.
    pub fn init_surface(&mut self, surface: SurfaceTag) {
        self.surface = surface;
    }

    /// The chunk coordinate this chunk is bound to.
    pub fn position(&self) -> ChunkCoordinate {
        self.position
    }

    /// The footprint and meshing policy of this chunk.
    pub fn layout(&self) -> &ChunkLayout {
        &self.layout
    }

    /// The dense block grid, in `x + width * (y + height * z)` order.
    pub fn blocks(&self) -> &[BlockType] {
        &self.blocks
    }

    /// The mesh from the last rebuild.
    pub fn mesh(&self) -> &ChunkMesh {
        &self.mesh
    }

    /// How many times the mesh has been rebuilt.
    pub fn mesh_revision(&self) -> u64 {
        self.mesh_revision
    }

    /// World-space position of the chunk's origin corner.
    pub fn world_origin(&self) -> Point3<f32> {
        self.position.world_origin_in(&self.layout)
    }

    /// Flat index of local `(x, y, z)`.
    ///
    /// # Panics
    /// Panics if the coordinates are outside the chunk. Cross-chunk queries must be
    /// redirected before they reach the grid.
    #[inline]
    fn index(&self, x: i32, y: i32, z: i32) -> usize {
        assert!(
            self.layout.contains(x, y, z),
            "local block ({x}, {y}, {z}) is outside chunk {:?}",
            self.position
        );
        (x + self.layout.width * (y + self.layout.height * z)) as usize
    }

    /// Block at local `(x, y, z)`, which may lie outside this chunk.
    ///
    /// Resolution order:
    /// 1. `y` at or above the chunk height is open sky: `Air`.
    /// 2. `x` or `z` outside the footprint is forwarded to `neighbors` for the adjacent
    ///    chunk, with the coordinate translated across the boundary.
    /// 3. `y` below zero has no data: `None`.
    /// 4. Otherwise the grid answers.
    pub fn get_block_type(&self, x: i32, y: i32, z: i32, neighbors: &dyn BlockQuery) -> BlockType {
        let width = self.layout.width;

        if y >= self.layout.height {
            return BlockType::Air;
        }

        if x < 0 {
            return neighbors.block_type_at(self.position.offset(-1, 0), width + x, y, z);
        }
        if x >= width {
            return neighbors.block_type_at(self.position.offset(1, 0), x - width, y, z);
        }
        if z < 0 {
            return neighbors.block_type_at(self.position.offset(0, -1), x, y, width + z);
        }
        if z >= width {
            return neighbors.block_type_at(self.position.offset(0, 1), x, y, z - width);
        }

        if y < 0 {
            return BlockType::None;
        }

        self.blocks[self.index(x, y, z)]
    }

    /// Rebuilds the whole mesh from the current grid and publishes it to `sink`.
    ///
    /// The previous buffers are replaced, never patched.
    pub fn build_mesh(&mut self, neighbors: &dyn BlockQuery, sink: &mut dyn MeshSink) {
        let mesh = ChunkMesh::culled(self, neighbors);
        self.mesh = mesh;
        self.mesh_revision += 1;

        trace!(
            "Chunk {:?} meshed: {} quads (revision {})",
            self.position,
            self.mesh.quad_count(),
            self.mesh_revision
        );

        sink.replace_buffers(MeshUpload {
            chunk: self.position,
            origin: self.world_origin(),
            mesh: &self.mesh,
            surface: &self.surface,
        });
        sink.refresh_collider(self.position);
    }

    /// Writes one cell without rebuilding the mesh. Used while populating terrain.
    pub(crate) fn write_block(&mut self, x: i32, y: i32, z: i32, block_type: BlockType) {
        let index = self.index(x, y, z);
        self.blocks[index] = block_type;
    }

    /// Sets one cell and rebuilds the mesh.
    ///
    /// # Panics
    /// Panics if `(x, y, z)` is outside the chunk.
    pub fn set_block(
        &mut self,
        x: i32,
        y: i32,
        z: i32,
        block_type: BlockType,
        neighbors: &dyn BlockQuery,
        sink: &mut dyn MeshSink,
    ) {
        self.write_block(x, y, z, block_type);
        self.build_mesh(neighbors, sink);
    }

    /// Turns one cell into air, rebuilds the mesh, and reports what was there.
    ///
    /// # Panics
    /// Panics if `(x, y, z)` is outside the chunk.
    pub fn remove_block(
        &mut self,
        x: i32,
        y: i32,
        z: i32,
        neighbors: &dyn BlockQuery,
        sink: &mut dyn MeshSink,
    ) -> BlockRemoval {
        let index = self.index(x, y, z);
        let previous = std::mem::replace(&mut self.blocks[index], BlockType::Air);

        self.build_mesh(neighbors, sink);

        BlockRemoval {
            previous,
            on_edge: self.is_horizontal_edge(x, z),
        }
    }

    /// Whether local `(x, z)` touches the chunk's x/z boundary.
    pub fn is_horizontal_edge(&self, x: i32, z: i32) -> bool {
        let edge = self.layout.width - 1;
        x == 0 || z == 0 || x == edge || z == edge
    }

    /// Whether any coordinate of local `(x, y, z)` sits on its axis boundary.
    pub fn is_edge_position(layout: &ChunkLayout, x: i32, y: i32, z: i32) -> bool {
        let edge_width = layout.width - 1;
        let edge_height = layout.height - 1;
        x == 0 || y == 0 || z == 0 || x == edge_width || y == edge_height || z == edge_width
    }
}
