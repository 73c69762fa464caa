//! # Voxel World Core
//!
//! This module contains the voxel data model: what a cell can hold, how cells are grouped
//! into chunks, how chunks form the finite world grid, and how world positions map onto it.
//!
//! ## Architecture
//!
//! * **Block**: Block types, block sides and their texture indices
//! * **Coordinates**: Chunk and block coordinates, and the world-position split
//! * **Chunk**: Fixed-size dense block grids with cross-chunk neighbour lookup
//! * **Chunk Manager**: The `grid_size × grid_size` grid, edit dispatch and boundary
//!   re-meshing
//! * **Raycast**: Downward surface queries
//! * **World**: The grid plus players, ground finding and occupancy
//!
//! ## Data Flow
//!
//! 1. A world position becomes a block coordinate (floor division per axis)
//! 2. The chunk manager routes the request to the owning chunk
//! 3. Edits rebuild the chunk's mesh, and its neighbours' when the cell is on a boundary
//! 4. Rebuilt meshes go to the render/collision sink

pub mod block;
pub mod chunk;
pub mod chunk_manager;
pub mod coordinates;
pub mod raycast;
pub mod world;
