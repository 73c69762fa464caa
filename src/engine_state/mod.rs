//! # Engine State Module
//!
//! The root context of the voxel world. Everything that would otherwise be a global lives
//! here and is passed down explicitly.
//!
//! ## Key Components
//!
//! * `EngineState` - Owns the world, the inventory and the quick-slot selection
//! * `voxels` - Blocks, chunks, the chunk grid and world queries
//! * `rendering` - Culled meshing and the render/collision sink boundary
//! * `inventory` - Stacks of picked-up blocks and quick-slot selection
//! * `error` - Why an edit was refused
//!
//! ## Data Flow
//!
//! 1. An edit arrives as a block coordinate (break) or a coordinate plus the selected
//!    quick slot (place)
//! 2. The chunk manager writes the owning chunk and rebuilds its mesh
//! 3. Neighbours across a touched boundary are rebuilt too
//! 4. Every rebuilt mesh is handed to the sink before the call returns

use cgmath::Point3;
use log::{debug, info};

use crate::config::WorldConfig;
use crate::core::StSystem;

use error::EditError;
use inventory::{Inventory, QuickSlotManager};
use rendering::mesh_sink::MeshSink;
use voxels::{
    block::block_type::BlockType, chunk::TerrainGenerator, coordinates::BlockCoordinate,
    world::World,
};

pub mod error;
pub mod inventory;
pub mod rendering;
pub mod voxels;

/// Where the first player is dropped onto the terrain.
pub const PLAYER_SPAWN: Point3<f32> = Point3::new(16.0, 0.0, 16.0);

/// The main state container of the voxel world.
///
/// # Examples
///
/// ```
/// use voxel_world::core::StSystem;
/// use voxel_world::engine_state::{rendering::mesh_sink::NullMeshSink, EngineState};
/// use voxel_world::WorldConfig;
///
/// let config = WorldConfig { grid_size: 2, ..WorldConfig::default() };
/// let engine = EngineState::new(config, StSystem::new(Box::new(NullMeshSink)));
/// assert_eq!(engine.world.chunk_manager().chunk_count(), 4);
/// ```
pub struct EngineState {
    /// The chunk grid and its players.
    pub world: World,
    /// Blocks the player has picked up.
    pub inventory: Inventory,
    /// Which quick slot placement draws from.
    pub quick_slots: QuickSlotManager,
}

impl EngineState {
    /// Builds the world with terrain from `config.terrain` and spawns the player.
    pub fn new(config: WorldConfig, sink: StSystem<dyn MeshSink>) -> Self {
        let terrain = TerrainGenerator::from_config(&config.terrain);
        Self::with_terrain(config, sink, &terrain)
    }

    /// Builds the world from an explicit terrain generator and spawns the player.
    pub fn with_terrain(config: WorldConfig, sink: StSystem<dyn MeshSink>, terrain: &TerrainGenerator) -> Self {
        let mut world = World::new(config, sink);
        world.init(terrain);

        let player = world.add_player(PLAYER_SPAWN);
        match world.set_player_position(player, PLAYER_SPAWN) {
            Some(position) => info!("Player spawned at {:?}", position),
            None => info!("No ground under {:?}; player left in place", PLAYER_SPAWN),
        }

        Self {
            world,
            inventory: Inventory::new(),
            quick_slots: QuickSlotManager::new(),
        }
    }

    /// Breaks the targeted block and picks it up. Returns what was broken.
    ///
    /// Only solid blocks go into the inventory; anything that does not fit is dropped.
    pub fn break_block(&mut self, target: &BlockCoordinate) -> Result<BlockType, EditError> {
        let broken = self.world.chunk_manager_mut().remove_block(target)?;

        if broken.is_solid() {
            let dropped = self.inventory.add_item(broken, 1);
            if dropped > 0 {
                debug!("Inventory full; dropped {:?}", broken);
            }
        }
        Ok(broken)
    }

    /// Places one block from the selected quick slot at `target`. Returns the type
    /// placed.
    ///
    /// Nothing is consumed when the placement is refused.
    pub fn place_current_item(&mut self, target: &BlockCoordinate) -> Result<BlockType, EditError> {
        if target.is_null {
            return Err(EditError::NullTarget);
        }

        let slot = self.quick_slots.current_index();
        let item_type = self
            .inventory
            .quick_slot(slot)
            .map(|item| item.item_type)
            .ok_or(EditError::EmptyQuickSlot(slot))?;

        if self.world.is_any_player_in_block_position(target) {
            return Err(EditError::OccupiedByPlayer);
        }

        self.world.chunk_manager_mut().set_block(target, item_type)?;
        self.inventory.take_from_slot(slot, 1);
        Ok(item_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_state::rendering::mesh_sink::NullMeshSink;
    use crate::engine_state::voxels::coordinates::ChunkCoordinate;

    fn engine() -> EngineState {
        let config = WorldConfig {
            chunk_width: 4,
            chunk_height: 8,
            grid_size: 2,
            ..WorldConfig::default()
        };
        // surface row 4; spawn (16, 16) is off this 8x8 world
        EngineState::with_terrain(
            config,
            StSystem::new(Box::new(NullMeshSink)),
            &TerrainGenerator::flat(0.0, 10.0),
        )
    }

    fn cell(x: i32, y: i32, z: i32) -> BlockCoordinate {
        BlockCoordinate::new(ChunkCoordinate::new(0, 0), x, y, z)
    }

    #[test]
    fn spawn_outside_the_grid_leaves_player_in_place() {
        let engine = engine();
        assert_eq!(engine.world.players().len(), 1);
        assert_eq!(engine.world.player(0).unwrap().position, PLAYER_SPAWN);
    }

    #[test]
    fn breaking_picks_up_the_block() {
        let mut engine = engine();
        assert_eq!(engine.break_block(&cell(1, 4, 1)), Ok(BlockType::Grass));
        assert_eq!(engine.inventory.count(BlockType::Grass), 1);

        assert_eq!(engine.break_block(&cell(1, 4, 1)), Ok(BlockType::Air));
        assert_eq!(engine.inventory.count(BlockType::Air), 0);
        assert!(engine.inventory.slot(1).is_none());
    }

    #[test]
    fn placing_consumes_from_the_selected_slot() {
        let mut engine = engine();
        engine.break_block(&cell(1, 4, 1)).unwrap();

        assert_eq!(engine.place_current_item(&cell(1, 5, 1)), Ok(BlockType::Grass));
        assert_eq!(engine.world.chunk_manager().block_type_at(&cell(1, 5, 1)), BlockType::Grass);
        assert!(engine.inventory.quick_slot(0).is_none());

        assert_eq!(
            engine.place_current_item(&cell(1, 6, 1)),
            Err(EditError::EmptyQuickSlot(0))
        );
    }

    #[test]
    fn refused_placements_keep_the_item() {
        let mut engine = engine();
        engine.break_block(&cell(2, 4, 2)).unwrap();

        assert_eq!(
            engine.place_current_item(&BlockCoordinate::null()),
            Err(EditError::NullTarget)
        );

        engine.world.add_player(Point3::new(1.5, 5.0, 1.5));
        assert_eq!(
            engine.place_current_item(&cell(1, 5, 1)),
            Err(EditError::OccupiedByPlayer)
        );
        assert_eq!(
            engine.place_current_item(&cell(1, 8, 1)),
            Err(EditError::OutOfBounds { x: 1, y: 8, z: 1 })
        );
        assert_eq!(engine.inventory.count(BlockType::Grass), 1);
    }

    #[test]
    fn quick_slot_selection_drives_placement() {
        let mut engine = engine();
        engine.break_block(&cell(1, 4, 1)).unwrap();
        engine.break_block(&cell(1, 3, 1)).unwrap();
        assert_eq!(engine.inventory.slot(1).map(|i| i.item_type), Some(BlockType::Dirt));

        engine.quick_slots.increase_quick_slot_index();
        assert_eq!(engine.place_current_item(&cell(1, 3, 1)), Ok(BlockType::Dirt));
        assert_eq!(engine.inventory.count(BlockType::Dirt), 0);
        assert_eq!(engine.inventory.count(BlockType::Grass), 1);
    }
}
