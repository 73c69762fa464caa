//! # Chunk Iteration Module
//!
//! Iteration over the solid cells of a chunk in storage order, which is the order the
//! mesh builder emits quads in.

use cgmath::Point3;

use crate::engine_state::voxels::block::block_type::BlockType;

use super::Chunk;

/// An iterator over all solid blocks in a chunk, yielding local position and type.
///
/// Cells are visited in flat storage order (x fastest, then y, then z), so two
/// iterations over an unchanged chunk always agree.
pub struct SolidBlockIterator<'a> {
    /// Reference to the chunk being iterated over
    chunk_ref: &'a Chunk,
    /// Next flat index to inspect
    index: usize,
}

impl<'a> SolidBlockIterator<'a> {
    /// Creates a new `SolidBlockIterator` positioned before the first cell.
    pub fn new(chunk_ref: &'a Chunk) -> Self {
        SolidBlockIterator { chunk_ref, index: 0 }
    }
}

impl Iterator for SolidBlockIterator<'_> {
    type Item = (Point3<i32>, BlockType);

    fn next(&mut self) -> Option<Self::Item> {
        let blocks = self.chunk_ref.blocks();
        let layout = self.chunk_ref.layout();

        while self.index < blocks.len() {
            let index = self.index;
            self.index += 1;

            let block_type = blocks[index];
            if !block_type.is_solid() {
                continue;
            }

            let index = index as i32;
            let x = index % layout.width;
            let y = (index / layout.width) % layout.height;
            let z = index / (layout.width * layout.height);
            return Some((Point3::new(x, y, z), block_type));
        }

        None
    }
}

impl Chunk {
    /// Iterates over the solid cells of this chunk.
    pub fn solid_blocks(&self) -> SolidBlockIterator<'_> {
        SolidBlockIterator::new(self)
    }
}
