//! The render/collision backend boundary.
//!
//! Chunks do not render or collide themselves. After each rebuild a chunk hands its
//! complete vertex and index buffers to a [`MeshSink`], which must replace whatever it
//! held for that chunk, then asks the sink to refresh the chunk's collision geometry.

use cgmath::Point3;
use log::trace;

use crate::config::RenderConfig;
use crate::core::StResource;
use crate::engine_state::voxels::coordinates::ChunkCoordinate;

use super::meshing::mesh::ChunkMesh;

/// Material and logical layer a chunk mesh is rendered and collided on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SurfaceTag {
    /// Material name.
    pub material: String,
    /// Logical layer id.
    pub layer: u32,
}

impl From<&RenderConfig> for SurfaceTag {
    fn from(config: &RenderConfig) -> Self {
        Self {
            material: config.material.clone(),
            layer: config.layer,
        }
    }
}

/// One chunk's freshly built buffers.
#[derive(Debug, Clone, Copy)]
pub struct MeshUpload<'a> {
    /// Chunk the buffers belong to.
    pub chunk: ChunkCoordinate,
    /// World position of the chunk origin; vertex positions are relative to it.
    pub origin: Point3<f32>,
    /// The complete mesh.
    pub mesh: &'a ChunkMesh,
    /// Material and layer.
    pub surface: &'a SurfaceTag,
}

/// Receives chunk meshes for rendering and collision.
pub trait MeshSink {
    /// Replaces the buffers held for `upload.chunk`.
    fn replace_buffers(&mut self, upload: MeshUpload<'_>);

    /// Forces the collision geometry of `chunk` to be rebuilt from its current buffers.
    fn refresh_collider(&mut self, chunk: ChunkCoordinate);
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullMeshSink;

impl MeshSink for NullMeshSink {
    fn replace_buffers(&mut self, _upload: MeshUpload<'_>) {}

    fn refresh_collider(&mut self, _chunk: ChunkCoordinate) {}
}

/// Logs every upload at trace level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingMeshSink;

impl MeshSink for LoggingMeshSink {
    fn replace_buffers(&mut self, upload: MeshUpload<'_>) {
        trace!(
            "Uploading chunk {:?} at {:?}: {} vertices, {} indices, material {} layer {}",
            upload.chunk,
            upload.origin,
            upload.mesh.vertices.len(),
            upload.mesh.indices.len(),
            upload.surface.material,
            upload.surface.layer
        );
    }

    fn refresh_collider(&mut self, chunk: ChunkCoordinate) {
        trace!("Refreshing collider for chunk {:?}", chunk);
    }
}

/// What a [`RecordingMeshSink`] saw.
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    /// Buffers were replaced.
    Upload {
        /// Chunk uploaded.
        chunk: ChunkCoordinate,
        /// Vertex count.
        vertices: usize,
        /// Index count.
        indices: usize,
        /// Layer tag.
        layer: u32,
    },
    /// A collider refresh was requested.
    ColliderRefresh(ChunkCoordinate),
}

/// Keeps a shared log of uploads, for inspecting what the world published.
#[derive(Clone)]
pub struct RecordingMeshSink {
    events: StResource<Vec<SinkEvent>>,
}

impl RecordingMeshSink {
    /// Creates a sink with an empty log.
    pub fn new() -> Self {
        Self {
            events: StResource::new(Vec::new()),
        }
    }

    /// A handle to the log that stays valid after the sink is handed to a world.
    pub fn events(&self) -> StResource<Vec<SinkEvent>> {
        self.events.clone()
    }
}

impl Default for RecordingMeshSink {
    fn default() -> Self {
        Self::new()
    }
}

impl MeshSink for RecordingMeshSink {
    fn replace_buffers(&mut self, upload: MeshUpload<'_>) {
        self.events.get_mut().push(SinkEvent::Upload {
            chunk: upload.chunk,
            vertices: upload.mesh.vertices.len(),
            indices: upload.mesh.indices.len(),
            layer: upload.surface.layer,
        });
    }

    fn refresh_collider(&mut self, chunk: ChunkCoordinate) {
        self.events.get_mut().push(SinkEvent::ColliderRefresh(chunk));
    }
}
