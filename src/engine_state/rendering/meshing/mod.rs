//! Mesh generation for chunks.
//!
//! Every chunk is meshed on its own, on the calling thread, into one vertex buffer and
//! one index buffer. There is no merging of coplanar faces: each visible block face is
//! one quad.

pub mod mesh;
