//! Mesh generation for voxel rendering.
//!
//! Converts a chunk's block grid into a plain vertex/index buffer with one quad per
//! visible block face. A face is visible when the block on its other side is not solid,
//! and that block may live in a neighbouring chunk.
//!
//! # Architecture
//! - [`ChunkMesh`]: vertex buffer, triangle index buffer and the faces they came from
//! - [`Face`]: a single block face with its corner layout and winding
//!
//! # Usage
//! ```
//! use voxel_world::config::ChunkLayout;
//! use voxel_world::engine_state::rendering::meshing::mesh::ChunkMesh;
//! use voxel_world::engine_state::voxels::chunk::{Chunk, NoNeighbors};
//! use voxel_world::ChunkCoordinate;
//!
//! let chunk = Chunk::solid(ChunkCoordinate::new(0, 0), ChunkLayout::default());
//! let mesh = ChunkMesh::culled(&chunk, &NoNeighbors);
//! assert_eq!(mesh.vertices.len(), mesh.quad_count() * 4);
//! ```

mod face;
#[allow(clippy::module_inception)]
mod mesh;

pub use face::Face;
pub use mesh::*;
