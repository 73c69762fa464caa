//! Rendering-side data for the voxel engine.
//!
//! The engine does not draw anything itself. This module defines the vertex format,
//! the face-culling mesh builder, and the [`MeshSink`](mesh_sink::MeshSink) boundary
//! through which finished chunk meshes reach a render/collision backend.

pub mod mesh_sink;
pub mod meshing;
mod vertex;

// Re-export commonly used types
pub use vertex::Vertex;
