//! # World Module
//!
//! This module provides the `World` struct, which owns the chunk grid and the players
//! standing on it, and answers the ground queries gameplay needs.
//!
//! ## Ground queries
//!
//! Ground is found by casting a ray straight down against the block surface on the
//! render layer. [`GridRaycaster`] walks the grid directly; callers with a physics scene
//! can supply their own [`VerticalRaycast`] through the `_with` variants.

use cgmath::{Point3, Vector3};
use log::{debug, info};

use crate::config::WorldConfig;
use crate::core::StSystem;
use crate::engine_state::rendering::mesh_sink::MeshSink;

use super::chunk::TerrainGenerator;
use super::chunk_manager::ChunkManager;
use super::coordinates::BlockCoordinate;
use super::raycast::{GridRaycaster, VerticalRaycast};

/// Height the ground-finding ray starts from.
pub const GROUND_RAY_HEIGHT: f32 = 1000.0;

/// How far any downward ray travels.
pub const GROUND_RAY_DISTANCE: f32 = 1000.0;

/// Player footprint along x and z.
pub const PLAYER_WIDTH: f32 = 0.8;

/// Player height.
pub const PLAYER_HEIGHT: f32 = 1.6;

/// Someone standing in the world. `position` is the centre of the player's feet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    /// Feet centre, in world units.
    pub position: Point3<f32>,
}

impl Player {
    /// A player standing at `position`.
    pub fn new(position: Point3<f32>) -> Self {
        Self { position }
    }

    /// Minimum and maximum corners of the player's bounding box.
    pub fn bounds(&self) -> (Point3<f32>, Point3<f32>) {
        let half = PLAYER_WIDTH * 0.5;
        let p = self.position;
        (
            Point3::new(p.x - half, p.y, p.z - half),
            Point3::new(p.x + half, p.y + PLAYER_HEIGHT, p.z + half),
        )
    }

    /// Whether the bounding box overlaps the open box `min..max`. Touching faces do not
    /// count, so a player standing on a block does not occupy it.
    pub fn overlaps(&self, min: Point3<f32>, max: Point3<f32>) -> bool {
        let (lo, hi) = self.bounds();
        lo.x < max.x && hi.x > min.x && lo.y < max.y && hi.y > min.y && lo.z < max.z && hi.z > min.z
    }
}

/// The playable world: the chunk grid plus its players.
pub struct World {
    chunk_manager: ChunkManager,
    players: Vec<Player>,
}

impl World {
    /// An empty world. Chunks are allocated by [`init`](Self::init).
    pub fn new(config: WorldConfig, sink: StSystem<dyn MeshSink>) -> Self {
        Self {
            chunk_manager: ChunkManager::new(config, sink),
            players: Vec::new(),
        }
    }

    /// Builds the whole chunk grid from `terrain`.
    pub fn init(&mut self, terrain: &TerrainGenerator) {
        self.chunk_manager.init_chunks(terrain);
    }

    /// The chunk grid.
    pub fn chunk_manager(&self) -> &ChunkManager {
        &self.chunk_manager
    }

    /// The chunk grid, for edits.
    pub fn chunk_manager_mut(&mut self) -> &mut ChunkManager {
        &mut self.chunk_manager
    }

    /// Adds a player and returns its index.
    pub fn add_player(&mut self, position: Point3<f32>) -> usize {
        self.players.push(Player::new(position));
        self.players.len() - 1
    }

    /// The player at `index`.
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Every player.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Height of the highest exposed surface on the vertical line through `position`,
    /// ignoring `position.y`.
    pub fn top_block_position(&self, position: Point3<f32>) -> Option<f32> {
        self.top_block_position_with(&GridRaycaster::new(&self.chunk_manager), position)
    }

    /// [`top_block_position`](Self::top_block_position) against a custom raycaster.
    pub fn top_block_position_with(&self, caster: &dyn VerticalRaycast, position: Point3<f32>) -> Option<f32> {
        let origin = Point3::new(position.x, GROUND_RAY_HEIGHT, position.z);
        caster.cast_vertical_ray(origin, GROUND_RAY_DISTANCE, self.block_layer())
    }

    /// Whether an exposed surface lies below `position`.
    pub fn is_block_exists_at_bottom(&self, position: Point3<f32>) -> bool {
        self.is_block_exists_at_bottom_with(&GridRaycaster::new(&self.chunk_manager), position)
    }

    /// [`is_block_exists_at_bottom`](Self::is_block_exists_at_bottom) against a custom
    /// raycaster.
    pub fn is_block_exists_at_bottom_with(&self, caster: &dyn VerticalRaycast, position: Point3<f32>) -> bool {
        caster
            .cast_vertical_ray(position, GROUND_RAY_DISTANCE, self.block_layer())
            .is_some()
    }

    /// Moves a player onto the ground of the column containing `position`: centred in
    /// the block column, one block above the top surface. Returns the new position, or
    /// `None` (player untouched) when the column has no surface or the player does not
    /// exist.
    pub fn set_player_position(&mut self, player: usize, position: Point3<f32>) -> Option<Point3<f32>> {
        let top = self.top_block_position(position)?;
        let block_length = self.chunk_manager.config().block_length;
        let half = block_length * 0.5;

        let snapped = Point3::new(
            (position.x / block_length).floor() * block_length + half,
            top + block_length,
            (position.z / block_length).floor() * block_length + half,
        );

        let player = self.players.get_mut(player)?;
        player.position = snapped;
        debug!("Player moved to {:?}", snapped);
        Some(snapped)
    }

    /// Whether any player's bounding box overlaps the cell at `block`.
    pub fn is_any_player_in_block_position(&self, block: &BlockCoordinate) -> bool {
        if block.is_null {
            return false;
        }
        let config = self.chunk_manager.config();
        let min = block.to_world_position(config);
        let max = min + Vector3::new(1.0, 1.0, 1.0) * config.block_length;
        self.players.iter().any(|player| player.overlaps(min, max))
    }

    /// Logs a one-line summary of the world.
    pub fn log_summary(&self) {
        let quads: usize = self
            .chunk_manager
            .coordinates()
            .into_iter()
            .filter_map(|c| self.chunk_manager.get_chunk(c))
            .map(|chunk| chunk.get().mesh().quad_count())
            .sum();
        info!(
            "World: {} chunks, {} quads, {} players",
            self.chunk_manager.chunk_count(),
            quads,
            self.players.len()
        );
    }

    fn block_layer(&self) -> u32 {
        self.chunk_manager.config().render.layer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_state::rendering::mesh_sink::NullMeshSink;
    use crate::engine_state::voxels::block::block_type::BlockType;
    use crate::engine_state::voxels::coordinates::ChunkCoordinate;

    fn world() -> World {
        let config = WorldConfig {
            chunk_width: 4,
            chunk_height: 8,
            grid_size: 2,
            ..WorldConfig::default()
        };
        let mut world = World::new(config, StSystem::new(Box::new(NullMeshSink)));
        // surface row 4, top face at 5.0
        world.init(&TerrainGenerator::flat(0.0, 10.0));
        world
    }

    /// Always reports the same hit, whatever it is asked.
    struct FixedHit(Option<f32>);

    impl VerticalRaycast for FixedHit {
        fn cast_vertical_ray(&self, _: Point3<f32>, _: f32, _: u32) -> Option<f32> {
            self.0
        }
    }

    #[test]
    fn top_block_ignores_query_height() {
        let world = world();
        assert_eq!(world.top_block_position(Point3::new(2.5, -50.0, 3.5)), Some(5.0));
        assert_eq!(world.top_block_position(Point3::new(-2.5, 0.0, 3.5)), None);
    }

    #[test]
    fn bottom_check_uses_query_height() {
        let world = world();
        assert!(world.is_block_exists_at_bottom(Point3::new(2.5, 6.0, 2.5)));
        assert!(!world.is_block_exists_at_bottom(Point3::new(2.5, 4.5, 2.5)));
    }

    #[test]
    fn custom_raycaster_is_used() {
        let world = world();
        assert_eq!(
            world.top_block_position_with(&FixedHit(Some(2.0)), Point3::new(0.0, 0.0, 0.0)),
            Some(2.0)
        );
        assert!(!world.is_block_exists_at_bottom_with(&FixedHit(None), Point3::new(1.0, 9.0, 1.0)));
    }

    #[test]
    fn player_snaps_to_column_centre() {
        let mut world = world();
        let player = world.add_player(Point3::new(0.0, 0.0, 0.0));
        let placed = world.set_player_position(player, Point3::new(6.2, 0.0, 1.9));
        assert_eq!(placed, Some(Point3::new(6.5, 6.0, 1.5)));
        assert_eq!(world.player(player).unwrap().position, Point3::new(6.5, 6.0, 1.5));
    }

    #[test]
    fn player_without_ground_stays_put() {
        let mut world = world();
        let start = Point3::new(1.0, 2.0, 3.0);
        let player = world.add_player(start);
        assert_eq!(world.set_player_position(player, Point3::new(40.0, 0.0, 40.0)), None);
        assert_eq!(world.player(player).unwrap().position, start);
        assert_eq!(world.set_player_position(7, Point3::new(1.0, 0.0, 1.0)), None);
    }

    #[test]
    fn occupancy_uses_player_box() {
        let mut world = world();
        world.add_player(Point3::new(1.5, 5.0, 1.5));
        let cell = |x, y, z| BlockCoordinate::new(ChunkCoordinate::new(0, 0), x, y, z);

        assert!(world.is_any_player_in_block_position(&cell(1, 5, 1)));
        assert!(world.is_any_player_in_block_position(&cell(1, 6, 1)));
        assert!(!world.is_any_player_in_block_position(&cell(1, 4, 1)), "standing on it");
        assert!(!world.is_any_player_in_block_position(&cell(1, 7, 1)));
        assert!(!world.is_any_player_in_block_position(&cell(2, 5, 1)));
        assert!(!world.is_any_player_in_block_position(&BlockCoordinate::null()));
    }

    #[test]
    fn edits_change_the_ground() {
        let mut world = world();
        let surface = BlockCoordinate::new(ChunkCoordinate::new(0, 0), 2, 4, 2);
        assert_eq!(world.chunk_manager_mut().remove_block(&surface), Ok(BlockType::Grass));
        assert_eq!(world.top_block_position(Point3::new(2.5, 0.0, 2.5)), Some(4.0));
    }
}
