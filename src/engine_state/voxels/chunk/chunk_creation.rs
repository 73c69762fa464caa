//! # Chunk Creation Module
//!
//! Terrain population. Each block column asks a height collaborator for a normalized
//! noise value and turns it into the row where air begins:
//!
//! `air_row = round((chunk_height - noise * amplitude) / 2)`
//!
//! Rows at or below `air_row` are solid, with grass on the topmost one; rows above are air.

use noise::{NoiseFn, Perlin};

use crate::config::{ChunkLayout, TerrainConfig};
use crate::engine_state::voxels::{block::block_type::BlockType, coordinates::ChunkCoordinate};

use super::Chunk;

/// Source of terrain height: a normalized noise value for a world block column.
pub trait HeightFunction {
    /// Noise in `[0, 1]` for the column at world block `(world_x, world_z)`.
    fn sample(&self, world_x: i32, world_z: i32) -> f64;
}

/// The same height everywhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatHeight(pub f64);

impl HeightFunction for FlatHeight {
    fn sample(&self, _world_x: i32, _world_z: i32) -> f64 {
        self.0
    }
}

/// 2D Perlin noise, sampled on scaled column coordinates and remapped to `[0, 1]`.
pub struct PerlinHeight {
    perlin: Perlin,
    scale: f64,
}

impl PerlinHeight {
    /// Creates a seeded Perlin height source.
    pub fn new(seed: u32, scale: f64) -> Self {
        Self {
            perlin: Perlin::new(seed),
            scale,
        }
    }
}

impl HeightFunction for PerlinHeight {
    fn sample(&self, world_x: i32, world_z: i32) -> f64 {
        let value = self
            .perlin
            .get([world_x as f64 * self.scale, world_z as f64 * self.scale]);
        ((value + 1.0) * 0.5).clamp(0.0, 1.0)
    }
}

/// Turns height samples into block columns.
pub struct TerrainGenerator {
    height: Box<dyn HeightFunction>,
    amplitude: f64,
}

impl TerrainGenerator {
    /// Wraps a height source with the amplitude that scales it into rows.
    pub fn new(height: Box<dyn HeightFunction>, amplitude: f64) -> Self {
        Self { height, amplitude }
    }

    /// Perlin terrain from configuration. A missing seed is drawn at random.
    pub fn from_config(config: &TerrainConfig) -> Self {
        let seed = config.seed.unwrap_or_else(|| fastrand::u32(..));
        Self::new(
            Box::new(PerlinHeight::new(seed, config.noise_scale)),
            config.amplitude,
        )
    }

    /// Terrain whose air row is the same for every column.
    pub fn flat(noise: f64, amplitude: f64) -> Self {
        Self::new(Box::new(FlatHeight(noise)), amplitude)
    }

    /// Row where air begins for the column at world `(world_x, world_z)`.
    pub fn air_row(&self, layout: &ChunkLayout, world_x: i32, world_z: i32) -> i32 {
        let noise = self.height.sample(world_x, world_z);
        ((layout.height as f64 - noise * self.amplitude) / 2.0).round() as i32
    }
}

impl Chunk {
    /// Binds this chunk to `position` and fills its grid from `terrain`.
    pub fn set_position(&mut self, position: ChunkCoordinate, terrain: &TerrainGenerator) {
        self.position = position;

        let layout = self.layout;
        let base_x = position.x * layout.width;
        let base_z = position.z * layout.width;

        for x in 0..layout.width {
            for z in 0..layout.width {
                let air_row = terrain.air_row(&layout, base_x + x, base_z + z);
                for y in 0..layout.height {
                    let block_type = if y > air_row {
                        BlockType::Air
                    } else if y == air_row {
                        BlockType::Grass
                    } else {
                        BlockType::Dirt
                    };
                    self.write_block(x, y, z, block_type);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_state::voxels::chunk::NoNeighbors;

    #[test]
    fn flat_zero_noise_puts_air_above_row_32() {
        let layout = ChunkLayout::default();
        let terrain = TerrainGenerator::flat(0.0, 10.0);
        assert_eq!(terrain.air_row(&layout, 0, 0), 32);

        let mut chunk = Chunk::empty(ChunkCoordinate::new(0, 0), layout);
        chunk.set_position(ChunkCoordinate::new(3, 1), &terrain);
        assert_eq!(chunk.position(), ChunkCoordinate::new(3, 1));
        assert_eq!(chunk.get_block_type(5, 32, 5, &NoNeighbors), BlockType::Grass);
        assert_eq!(chunk.get_block_type(5, 31, 5, &NoNeighbors), BlockType::Dirt);
        assert_eq!(chunk.get_block_type(5, 33, 5, &NoNeighbors), BlockType::Air);
    }

    #[test]
    fn full_noise_lowers_the_surface() {
        let layout = ChunkLayout::default();
        // (64 - 1.0 * 10) / 2 = 27
        assert_eq!(TerrainGenerator::flat(1.0, 10.0).air_row(&layout, 9, 9), 27);
        // (64 - 0.5 * 10) / 2 = 29.5, rounded away from zero
        assert_eq!(TerrainGenerator::flat(0.5, 10.0).air_row(&layout, 9, 9), 30);
    }

    #[test]
    fn perlin_is_normalized_and_deterministic() {
        let a = PerlinHeight::new(7, 0.1);
        let b = PerlinHeight::new(7, 0.1);
        for (x, z) in [(0, 0), (13, -4), (-200, 77), (1023, 5)] {
            let sample = a.sample(x, z);
            assert!((0.0..=1.0).contains(&sample));
            assert_eq!(sample, b.sample(x, z));
        }
    }

    #[test]
    fn column_heights_follow_world_coordinates() {
        struct Stairs;
        impl HeightFunction for Stairs {
            fn sample(&self, world_x: i32, _world_z: i32) -> f64 {
                world_x as f64 / 100.0
            }
        }

        let layout = ChunkLayout::default();
        let terrain = TerrainGenerator::new(Box::new(Stairs), 100.0);
        let mut chunk = Chunk::empty(ChunkCoordinate::new(0, 0), layout);
        chunk.set_position(ChunkCoordinate::new(1, 0), &terrain);

        // world x = 16 + 4 = 20 -> air row (64 - 20) / 2 = 22
        assert_eq!(chunk.get_block_type(4, 22, 0, &NoNeighbors), BlockType::Grass);
        assert_eq!(chunk.get_block_type(4, 23, 0, &NoNeighbors), BlockType::Air);
    }
}
