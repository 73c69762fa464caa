//! # Chunk Manager Module
//!
//! The world grid: every chunk of the finite world, keyed by chunk coordinate.
//!
//! ## Responsibilities
//!
//! - Allocates the `grid_size × grid_size` chunk grid once, populates terrain and builds
//!   every mesh
//! - Resolves chunk coordinates to chunks; coordinates outside the grid resolve to
//!   nothing, and block queries there to `BlockType::None`
//! - Answers the cross-chunk queries chunks make while meshing (it is the
//!   [`BlockQuery`] every chunk is given)
//! - Propagates edits: when an edited cell lies on a chunk's x/z boundary, the chunk on
//!   the other side of that boundary is re-meshed so its culling sees the change
//!
//! ## Ownership
//!
//! Chunks sit behind `StResource` handles. An edit write-locks only the chunk being
//! changed; the neighbours it probes are read-locked one at a time. A chunk never asks
//! the manager about itself, so a locked chunk is never locked again.

use std::collections::HashMap;

use cgmath::Point3;
use log::{debug, info, warn};
use web_time::Instant;

use crate::config::WorldConfig;
use crate::core::{StResource, StSystem};
use crate::engine_state::error::EditError;
use crate::engine_state::rendering::mesh_sink::{MeshSink, SurfaceTag};

use super::block::block_type::BlockType;
use super::chunk::{BlockQuery, Chunk, NoNeighbors, TerrainGenerator};
use super::coordinates::{BlockCoordinate, ChunkCoordinate};

/// Owns every chunk of the world and routes queries and edits between them.
pub struct ChunkManager {
    /// World configuration, fixed for the manager's lifetime.
    config: WorldConfig,

    /// All chunks, keyed by chunk coordinate.
    chunks: HashMap<ChunkCoordinate, StResource<Chunk>>,

    /// Render/collision backend receiving every rebuilt mesh.
    sink: StSystem<dyn MeshSink>,
}

impl ChunkManager {
    /// Creates a manager with no chunks. Call [`init_chunks`](Self::init_chunks) before
    /// querying it.
    pub fn new(config: WorldConfig, sink: StSystem<dyn MeshSink>) -> Self {
        ChunkManager {
            config,
            chunks: HashMap::new(),
            sink,
        }
    }

    /// The configuration the grid was built with.
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Allocates the chunk grid, populates every chunk from `terrain`, then meshes them.
    ///
    /// Meshes are built only once every chunk exists, so boundary faces between chunks
    /// are culled against real neighbours.
    pub fn init_chunks(&mut self, terrain: &TerrainGenerator) {
        if !self.chunks.is_empty() {
            warn!("Re-initialising a world grid of {} chunks", self.chunks.len());
            self.chunks.clear();
        }

        let start = Instant::now();
        let layout = self.config.chunk_layout();
        let surface = SurfaceTag::from(&self.config.render);

        for x in 0..self.config.grid_size {
            for z in 0..self.config.grid_size {
                let coordinate = ChunkCoordinate::new(x, z);
                let mut chunk = Chunk::empty(coordinate, layout);
                chunk.set_position(coordinate, terrain);
                chunk.init_surface(surface.clone());
                self.add_chunk(coordinate, chunk);
            }
        }

        self.build_chunk_meshes();

        info!(
            "Initialised {} chunks ({}x{} grid) in {:?}",
            self.chunks.len(),
            self.config.grid_size,
            self.config.grid_size,
            start.elapsed()
        );
    }

    fn add_chunk(&mut self, coordinate: ChunkCoordinate, chunk: Chunk) {
        self.chunks.insert(coordinate, StResource::new(chunk));
    }

    fn build_chunk_meshes(&self) {
        for coordinate in self.coordinates() {
            self.rebuild_chunk(coordinate);
        }
    }

    /// Number of chunks in the grid.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Every chunk coordinate, sorted.
    pub fn coordinates(&self) -> Vec<ChunkCoordinate> {
        let mut coordinates: Vec<_> = self.chunks.keys().copied().collect();
        coordinates.sort();
        coordinates
    }

    /// The chunk at `coordinate`, or `None` outside the grid.
    pub fn get_chunk(&self, coordinate: ChunkCoordinate) -> Option<StResource<Chunk>> {
        self.chunks.get(&coordinate).cloned()
    }

    /// Block at local `(x, y, z)` of the chunk at `coordinate`.
    ///
    /// The chunk may forward one boundary step to its neighbour. A missing chunk, or a
    /// coordinate needing more than one step, yields `BlockType::None`.
    pub fn get_block_type(&self, coordinate: ChunkCoordinate, x: i32, y: i32, z: i32) -> BlockType {
        match self.chunks.get(&coordinate) {
            Some(chunk) => chunk.get().get_block_type(x, y, z, self),
            None => BlockType::None,
        }
    }

    /// Block at a block coordinate; `BlockType::None` for the null coordinate.
    pub fn block_type_at(&self, block: &BlockCoordinate) -> BlockType {
        if block.is_null {
            return BlockType::None;
        }
        self.get_block_type(block.chunk, block.x, block.y, block.z)
    }

    /// Block containing a world position.
    pub fn block_type_at_world(&self, position: Point3<f32>) -> BlockType {
        self.block_type_at(&self.block_coordinate(position))
    }

    /// Maps a world position to its block coordinate.
    pub fn block_coordinate(&self, position: Point3<f32>) -> BlockCoordinate {
        BlockCoordinate::from_world_position(position, &self.config)
    }

    /// In-place form of [`block_coordinate`](Self::block_coordinate).
    pub fn update_block_coordinate(&self, position: Point3<f32>, block: &mut BlockCoordinate) {
        block.set_from_world_position(position, &self.config);
    }

    /// Re-meshes the chunk at `coordinate` from its current data. Returns whether a
    /// chunk was there.
    pub fn rebuild_chunk(&self, coordinate: ChunkCoordinate) -> bool {
        match self.chunks.get(&coordinate) {
            Some(chunk) => {
                chunk.get_mut().build_mesh(self, &mut **self.sink.get_mut());
                true
            }
            None => false,
        }
    }

    /// Writes a solid `block_type` into the target cell, re-meshes its chunk, and
    /// re-meshes any neighbour sharing the cell's boundary. Clearing a cell goes through
    /// [`remove_block`](Self::remove_block).
    pub fn set_block(&mut self, block: &BlockCoordinate, block_type: BlockType) -> Result<(), EditError> {
        if !block_type.is_solid() {
            return Err(EditError::UnplaceableBlock(block_type));
        }
        let chunk = self.resolve_target(block)?;

        chunk
            .get_mut()
            .set_block(block.x, block.y, block.z, block_type, &*self, &mut **self.sink.get_mut());
        debug!("Set {:?} at {:?}", block_type, block);

        let on_edge = chunk.get().is_horizontal_edge(block.x, block.z);
        if on_edge {
            self.rebuild_edge_neighbors(block);
        }
        Ok(())
    }

    /// Turns the target cell into air and returns what was there, with the same
    /// re-meshing as [`set_block`](Self::set_block).
    pub fn remove_block(&mut self, block: &BlockCoordinate) -> Result<BlockType, EditError> {
        let chunk = self.resolve_target(block)?;

        let removal = chunk
            .get_mut()
            .remove_block(block.x, block.y, block.z, &*self, &mut **self.sink.get_mut());
        debug!("Removed {:?} at {:?}", removal.previous, block);

        if removal.on_edge {
            self.rebuild_edge_neighbors(block);
        }
        Ok(removal.previous)
    }

    fn resolve_target(&self, block: &BlockCoordinate) -> Result<StResource<Chunk>, EditError> {
        if block.is_null {
            return Err(EditError::NullTarget);
        }
        let chunk = self
            .get_chunk(block.chunk)
            .ok_or(EditError::ChunkNotFound(block.chunk))?;
        if !chunk.get().layout().contains(block.x, block.y, block.z) {
            return Err(EditError::OutOfBounds {
                x: block.x,
                y: block.y,
                z: block.z,
            });
        }
        Ok(chunk)
    }

    /// Re-meshes every existing chunk that shares an x/z boundary with the edited cell.
    ///
    /// Each boundary is checked on its own, so a corner cell re-meshes both neighbours.
    fn rebuild_edge_neighbors(&self, block: &BlockCoordinate) -> Vec<ChunkCoordinate> {
        let edge = self.config.chunk_width - 1;
        let mut offsets = Vec::with_capacity(2);
        if block.x == 0 {
            offsets.push((-1, 0));
        }
        if block.x == edge {
            offsets.push((1, 0));
        }
        if block.z == 0 {
            offsets.push((0, -1));
        }
        if block.z == edge {
            offsets.push((0, 1));
        }

        let rebuilt: Vec<ChunkCoordinate> = offsets
            .into_iter()
            .map(|(dx, dz)| block.chunk.offset(dx, dz))
            .filter(|neighbor| self.rebuild_chunk(*neighbor))
            .collect();

        debug!("Edge edit at {:?} re-meshed neighbours {:?}", block, rebuilt);
        rebuilt
    }
}

impl BlockQuery for ChunkManager {
    fn block_type_at(&self, chunk: ChunkCoordinate, x: i32, y: i32, z: i32) -> BlockType {
        match self.chunks.get(&chunk) {
            Some(chunk) => chunk.get().get_block_type(x, y, z, &NoNeighbors),
            None => BlockType::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_state::rendering::mesh_sink::{NullMeshSink, RecordingMeshSink, SinkEvent};

    fn small_config(grid_size: i32) -> WorldConfig {
        WorldConfig {
            chunk_width: 4,
            chunk_height: 8,
            grid_size,
            ..WorldConfig::default()
        }
    }

    fn flat_manager(grid_size: i32) -> ChunkManager {
        let mut manager = ChunkManager::new(small_config(grid_size), StSystem::new(Box::new(NullMeshSink)));
        // (8 - 0) / 2 = 4: rows 0..=4 solid
        manager.init_chunks(&TerrainGenerator::flat(0.0, 10.0));
        manager
    }

    #[test]
    fn init_allocates_every_coordinate_once() {
        let manager = flat_manager(3);
        assert_eq!(manager.chunk_count(), 9);
        for x in 0..3 {
            for z in 0..3 {
                let chunk = manager.get_chunk(ChunkCoordinate::new(x, z)).unwrap();
                assert_eq!(chunk.get().position(), ChunkCoordinate::new(x, z));
                assert_eq!(chunk.get().mesh_revision(), 1);
            }
        }
        assert!(manager.get_chunk(ChunkCoordinate::new(3, 0)).is_none());
        assert!(manager.get_chunk(ChunkCoordinate::new(-1, 0)).is_none());
    }

    #[test]
    fn queries_outside_the_grid_are_none() {
        let manager = flat_manager(2);
        assert_eq!(manager.get_block_type(ChunkCoordinate::new(5, 5), 0, 0, 0), BlockType::None);
        assert_eq!(manager.get_block_type(ChunkCoordinate::new(0, 0), -1, 0, 0), BlockType::None);
        assert_eq!(manager.get_block_type(ChunkCoordinate::new(1, 0), -1, 0, 0), BlockType::Dirt);
        // two boundaries away is not resolved
        assert_eq!(manager.get_block_type(ChunkCoordinate::new(0, 0), 4, 0, 4), BlockType::None);
    }

    #[test]
    fn world_position_lookup() {
        let manager = flat_manager(2);
        assert_eq!(manager.block_type_at_world(Point3::new(5.5, 4.2, 1.0)), BlockType::Grass);
        assert_eq!(manager.block_type_at_world(Point3::new(5.5, 5.2, 1.0)), BlockType::Air);
        assert_eq!(manager.block_type_at_world(Point3::new(-0.5, 1.0, 1.0)), BlockType::None);
        assert_eq!(manager.block_type_at(&BlockCoordinate::null()), BlockType::None);
    }

    #[test]
    fn edit_errors() {
        let mut manager = flat_manager(1);
        assert_eq!(
            manager.remove_block(&BlockCoordinate::null()),
            Err(EditError::NullTarget)
        );
        let far = BlockCoordinate::new(ChunkCoordinate::new(4, 4), 0, 0, 0);
        assert_eq!(
            manager.set_block(&far, BlockType::Dirt),
            Err(EditError::ChunkNotFound(ChunkCoordinate::new(4, 4)))
        );
        let outside = BlockCoordinate::new(ChunkCoordinate::new(0, 0), 1, 8, 1);
        assert_eq!(
            manager.set_block(&outside, BlockType::Dirt),
            Err(EditError::OutOfBounds { x: 1, y: 8, z: 1 })
        );
        let inside = BlockCoordinate::new(ChunkCoordinate::new(0, 0), 1, 1, 1);
        assert_eq!(
            manager.set_block(&inside, BlockType::None),
            Err(EditError::UnplaceableBlock(BlockType::None))
        );
        assert_eq!(
            manager.set_block(&inside, BlockType::Air),
            Err(EditError::UnplaceableBlock(BlockType::Air))
        );
    }

    #[test]
    fn interior_edit_rebuilds_only_its_chunk() {
        let mut manager = flat_manager(3);
        let target = BlockCoordinate::new(ChunkCoordinate::new(1, 1), 1, 4, 2);
        assert_eq!(manager.remove_block(&target), Ok(BlockType::Grass));

        for coordinate in manager.coordinates() {
            let expected = if coordinate == ChunkCoordinate::new(1, 1) { 2 } else { 1 };
            assert_eq!(manager.get_chunk(coordinate).unwrap().get().mesh_revision(), expected);
        }
    }

    #[test]
    fn corner_edit_rebuilds_both_neighbors() {
        let mut manager = flat_manager(3);
        let corner = BlockCoordinate::new(ChunkCoordinate::new(1, 1), 0, 2, 3);
        manager.set_block(&corner, BlockType::Stone).unwrap();

        let revision = |x, z| {
            manager
                .get_chunk(ChunkCoordinate::new(x, z))
                .unwrap()
                .get()
                .mesh_revision()
        };
        assert_eq!(revision(1, 1), 2);
        assert_eq!(revision(0, 1), 2);
        assert_eq!(revision(1, 2), 2);
        assert_eq!(revision(2, 1), 1);
        assert_eq!(revision(1, 0), 1);
        assert_eq!(revision(0, 2), 1, "diagonal chunk shares no face");
    }

    #[test]
    fn edge_edit_without_neighbor_is_fine() {
        let mut manager = flat_manager(1);
        let edge = BlockCoordinate::new(ChunkCoordinate::new(0, 0), 0, 4, 0);
        assert_eq!(manager.remove_block(&edge), Ok(BlockType::Grass));
        assert_eq!(manager.rebuild_edge_neighbors(&edge), Vec::new());
    }

    #[test]
    fn sink_sees_every_rebuild() {
        let sink = RecordingMeshSink::new();
        let events = sink.events();
        let mut manager = ChunkManager::new(small_config(2), StSystem::new(Box::new(sink)));
        manager.init_chunks(&TerrainGenerator::flat(0.0, 10.0));
        assert_eq!(events.get().len(), 8, "upload + collider refresh per chunk");

        events.get_mut().clear();
        let edge = BlockCoordinate::new(ChunkCoordinate::new(0, 0), 3, 4, 1);
        manager.remove_block(&edge).unwrap();

        let uploaded: Vec<ChunkCoordinate> = events
            .get()
            .iter()
            .filter_map(|e| match e {
                SinkEvent::Upload { chunk, layer, .. } => {
                    assert_eq!(*layer, 8);
                    Some(*chunk)
                }
                SinkEvent::ColliderRefresh(_) => None,
            })
            .collect();
        assert_eq!(uploaded, vec![ChunkCoordinate::new(0, 0), ChunkCoordinate::new(1, 0)]);
        assert_eq!(
            events.get().last(),
            Some(&SinkEvent::ColliderRefresh(ChunkCoordinate::new(1, 0)))
        );
    }

    #[test]
    fn conversion_helpers_agree() {
        let manager = flat_manager(1);
        let position = Point3::new(-3.25, 7.5, 18.0);
        let mut reused = BlockCoordinate::null();
        manager.update_block_coordinate(position, &mut reused);
        assert_eq!(reused, manager.block_coordinate(position));
    }
}
