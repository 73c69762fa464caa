//! Mesh data structures and the face-culling mesh builder.

use crate::engine_state::voxels::{
    block::{block_side::BlockSide, texture_index},
    chunk::{BlockQuery, Chunk},
};

use super::face::Face;
use crate::engine_state::rendering::Vertex;

/// Sides probed for every solid cell, in emission order.
const MESHED_SIDES: [BlockSide; 6] = [
    BlockSide::Top,
    BlockSide::Bottom,
    BlockSide::Left,
    BlockSide::Right,
    BlockSide::Front,
    BlockSide::Back,
];

/// A complete chunk mesh: one quad per visible block face.
///
/// `faces[n]` owns vertices `4n..4n + 4` and indices `6n..6n + 6`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChunkMesh {
    /// Vertex buffer, four per quad.
    pub vertices: Vec<Vertex>,
    /// Triangle index buffer, six per quad.
    pub indices: Vec<u32>,
    /// The face each quad was built from.
    pub faces: Vec<Face>,
}

impl ChunkMesh {
    /// Creates a new, empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the face-culled mesh of `chunk`.
    ///
    /// A face of a solid cell is emitted only when the block on the other side of it is
    /// not solid, where "the other side" may be in a neighbouring chunk resolved through
    /// `neighbors`. Bottom faces follow the chunk layout's `emit_bottom_faces` policy.
    pub fn culled(chunk: &Chunk, neighbors: &dyn BlockQuery) -> Self {
        let layout = chunk.layout();
        let mut mesh = ChunkMesh::new();

        for (position, block_type) in chunk.solid_blocks() {
            for side in MESHED_SIDES {
                if side == BlockSide::Bottom && !layout.emit_bottom_faces {
                    continue;
                }

                let (dx, dy, dz) = side.offset();
                let neighbor =
                    chunk.get_block_type(position.x + dx, position.y + dy, position.z + dz, neighbors);
                if neighbor.is_solid() {
                    continue;
                }

                mesh.add_face(
                    Face::new(position.x, position.y, position.z, block_type, side),
                    layout.block_length,
                );
            }
        }

        mesh
    }

    /// Appends one quad.
    pub fn add_face(&mut self, face: Face, block_length: f32) {
        let num_faces_generated = self.faces.len() as u32;
        self.vertices
            .extend(Self::generate_face_vertices(&face, block_length));
        self.indices
            .extend(Self::generate_face_indices(num_faces_generated));
        self.faces.push(face);
    }

    /// Generates the four vertices of a face, in `[ll, lr, ul, ur]` order.
    pub fn generate_face_vertices(face: &Face, block_length: f32) -> [Vertex; 4] {
        let texture = texture_index(face.block_type, face.block_side);
        let [ll, lr, ul, ur] = face.corners(block_length);
        [
            Vertex::new(ll, texture, 0.0, 1.0),
            Vertex::new(lr, texture, 1.0, 1.0),
            Vertex::new(ul, texture, 0.0, 0.0),
            Vertex::new(ur, texture, 1.0, 0.0),
        ]
    }

    /// Generates index data for a face, adjusted by the number of previously generated faces.
    ///
    /// The two triangles are (ll, lr, ur) and (ll, ur, ul).
    pub fn generate_face_indices(num_faces_generated: u32) -> [u32; 6] {
        let base = num_faces_generated * 4;
        [base, base + 1, base + 3, base, base + 3, base + 2]
    }

    /// Number of quads.
    pub fn quad_count(&self) -> usize {
        self.faces.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Whether the mesh has no geometry.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Number of quads facing `side`.
    pub fn quads_facing(&self, side: BlockSide) -> usize {
        self.faces.iter().filter(|f| f.block_side == side).count()
    }
}
