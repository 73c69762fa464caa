//! Vertex data handed to the render/collision backend.

use cgmath::Point3;

/// A vertex of a chunk mesh.
///
/// Positions are in world units relative to the chunk origin; the backend places the
/// chunk with the origin it receives alongside the buffers.
///
/// # Memory Layout
/// - Position: 3x f32 (12 bytes)
/// - Texture Index: u32 (4 bytes)
/// - Texture Coordinates: [f32; 2] (8 bytes)
///
/// Total size: 24 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Position relative to the chunk origin
    position: [f32; 3],
    /// Index of the texture in the texture array
    texture_index: u32,
    /// UV texture coordinates (0.0-1.0)
    tex_coords: [f32; 2],
}

impl Vertex {
    /// Creates a new vertex.
    pub fn new(pos: Point3<f32>, texture_index: u32, u: f32, v: f32) -> Self {
        Vertex {
            position: [pos.x, pos.y, pos.z],
            texture_index,
            tex_coords: [u, v],
        }
    }

    /// Position relative to the chunk origin.
    pub fn position(&self) -> Point3<f32> {
        Point3::new(self.position[0], self.position[1], self.position[2])
    }

    /// Texture array index.
    pub fn texture_index(&self) -> u32 {
        self.texture_index
    }

    /// UV coordinates.
    pub fn tex_coords(&self) -> [f32; 2] {
        self.tex_coords
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        let vertex = Vertex::new(Point3::new(1.0, 2.0, 3.0), 4, 0.0, 1.0);
        let bytes: &[u8] = bytemuck::bytes_of(&vertex);
        assert_eq!(bytes.len(), 24);
        assert_eq!(vertex.position(), Point3::new(1.0, 2.0, 3.0));
    }
}
