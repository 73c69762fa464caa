//! Downward ray queries against the block surface.

use cgmath::Point3;

use super::block::block_type::BlockType;
use super::chunk_manager::ChunkManager;

/// Casts straight-down rays against world geometry on one layer.
pub trait VerticalRaycast {
    /// Height of the first surface hit by a ray from `origin` pointing down, travelling
    /// at most `max_distance`. Only geometry on `layer` is considered.
    fn cast_vertical_ray(&self, origin: Point3<f32>, max_distance: f32, layer: u32) -> Option<f32>;
}

/// Walks a block column of the grid instead of a physics scene.
///
/// A cell stops the ray when it is solid and the cell above it is not, which is exactly
/// the set of cells whose top face the mesher emits. The hit height is the cell's top
/// face.
pub struct GridRaycaster<'a> {
    chunk_manager: &'a ChunkManager,
}

impl<'a> GridRaycaster<'a> {
    /// A raycaster over `chunk_manager`'s grid.
    pub fn new(chunk_manager: &'a ChunkManager) -> Self {
        Self { chunk_manager }
    }
}

impl VerticalRaycast for GridRaycaster<'_> {
    fn cast_vertical_ray(&self, origin: Point3<f32>, max_distance: f32, layer: u32) -> Option<f32> {
        let config = self.chunk_manager.config();
        if layer != config.render.layer || max_distance < 0.0 {
            return None;
        }

        let column = self.chunk_manager.block_coordinate(Point3::new(origin.x, 0.0, origin.z));
        self.chunk_manager.get_chunk(column.chunk)?;

        let block_length = config.block_length;
        let mut above = BlockType::Air;
        for y in (0..config.chunk_height).rev() {
            let block = self
                .chunk_manager
                .get_block_type(column.chunk, column.x, y, column.z);

            if block.is_solid() && !above.is_solid() {
                let top = (y + 1) as f32 * block_length;
                if top <= origin.y {
                    return (origin.y - top <= max_distance).then_some(top);
                }
            }
            above = block;
        }
        None
    }
}
