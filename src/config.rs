//! # Configuration
//!
//! The constants that shape a world: chunk footprint, block edge length, grid size,
//! terrain parameters and the surface tag handed to the render/collision sink. A
//! configuration is fixed once the world is initialised.
//!
//! Configurations are plain JSON. Every field has a default, so `{}` is a valid file:
//!
//! ```json
//! {
//!     "chunk_width": 16,
//!     "chunk_height": 64,
//!     "block_length": 1.0,
//!     "grid_size": 8,
//!     "emit_bottom_faces": false,
//!     "terrain": { "seed": 7, "noise_scale": 0.1, "amplitude": 10.0 },
//!     "render": { "material": "block_atlas", "layer": 8 }
//! }
//! ```

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound on the cells in one chunk.
pub const MAX_CHUNK_VOLUME: usize = 1 << 24;

/// Errors produced while loading or validating a [`WorldConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// The configuration text is not valid JSON for a `WorldConfig`.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field holds a value the world cannot be built with.
    #[error("invalid config value for `{field}`: {reason}")]
    Invalid {
        /// Name of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Parameters of the terrain height collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Noise seed. `None` draws a random seed when the world is created.
    pub seed: Option<u32>,
    /// Scale applied to world column coordinates before sampling noise.
    pub noise_scale: f64,
    /// How many rows a full-strength noise sample lowers the surface by (before halving).
    pub amplitude: f64,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            seed: None,
            noise_scale: 0.1,
            amplitude: 10.0,
        }
    }
}

/// Material and layer handed to the render/collision sink with every chunk mesh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Material name the backend renders chunk meshes with.
    pub material: String,
    /// Logical layer holding solid block geometry; ground queries filter on it.
    pub layer: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            material: "block_atlas".to_string(),
            layer: 8,
        }
    }
}

/// Top-level world configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Blocks along a chunk's x and z axes.
    pub chunk_width: i32,
    /// Blocks along a chunk's y axis.
    pub chunk_height: i32,
    /// World units per block edge.
    pub block_length: f32,
    /// Chunks per side of the square world grid.
    pub grid_size: i32,
    /// Whether meshes include downward-facing quads.
    pub emit_bottom_faces: bool,
    /// Terrain generation parameters.
    pub terrain: TerrainConfig,
    /// Surface tag for the render/collision sink.
    pub render: RenderConfig,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            chunk_width: 16,
            chunk_height: 64,
            block_length: 1.0,
            grid_size: 8,
            emit_bottom_faces: false,
            terrain: TerrainConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

impl WorldConfig {
    /// Parses and validates a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: WorldConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Checks that every dimension is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_width <= 0 {
            return Err(invalid("chunk_width", "must be positive"));
        }
        if self.chunk_height <= 0 {
            return Err(invalid("chunk_height", "must be positive"));
        }
        if !self.block_length.is_finite() || self.block_length <= 0.0 {
            return Err(invalid("block_length", "must be a finite positive number"));
        }
        if self.grid_size <= 0 {
            return Err(invalid("grid_size", "must be positive"));
        }
        let volume = self
            .chunk_width
            .checked_mul(self.chunk_height)
            .and_then(|area| area.checked_mul(self.chunk_width));
        match volume {
            Some(cells) if cells as usize <= MAX_CHUNK_VOLUME => {}
            _ => {
                return Err(invalid(
                    "chunk_width",
                    &format!("chunk volume exceeds {MAX_CHUNK_VOLUME} cells"),
                ))
            }
        }
        if self.grid_size.checked_mul(self.chunk_width).is_none() {
            return Err(invalid("grid_size", "world extent overflows the block grid"));
        }
        if !self.terrain.noise_scale.is_finite() || !self.terrain.amplitude.is_finite() {
            return Err(invalid("terrain", "noise_scale and amplitude must be finite"));
        }
        Ok(())
    }

    /// The per-chunk subset of the configuration.
    pub fn chunk_layout(&self) -> ChunkLayout {
        ChunkLayout {
            width: self.chunk_width,
            height: self.chunk_height,
            block_length: self.block_length,
            emit_bottom_faces: self.emit_bottom_faces,
        }
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}

/// Dimensions and meshing policy every chunk carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChunkLayout {
    /// Blocks along x and z.
    pub width: i32,
    /// Blocks along y.
    pub height: i32,
    /// World units per block edge.
    pub block_length: f32,
    /// Whether downward-facing quads are meshed.
    pub emit_bottom_faces: bool,
}

impl Default for ChunkLayout {
    fn default() -> Self {
        WorldConfig::default().chunk_layout()
    }
}

impl ChunkLayout {
    /// Number of cells in one chunk.
    pub fn volume(&self) -> usize {
        self.width as usize * self.height as usize * self.width as usize
    }

    /// Whether local `(x, y, z)` lies inside the chunk.
    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y) && (0..self.width).contains(&z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = WorldConfig::from_json_str("{}").unwrap();
        assert_eq!(config, WorldConfig::default());
        assert_eq!(config.chunk_layout().volume(), 16 * 64 * 16);
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config =
            WorldConfig::from_json_str(r#"{ "grid_size": 2, "terrain": { "seed": 9 } }"#).unwrap();
        assert_eq!(config.grid_size, 2);
        assert_eq!(config.terrain.seed, Some(9));
        assert_eq!(config.terrain.amplitude, 10.0);
        assert_eq!(config.chunk_width, 16);
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        let err = WorldConfig::from_json_str(r#"{ "chunk_width": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "chunk_width", .. }));

        let err = WorldConfig::from_json_str(r#"{ "block_length": -1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "block_length", .. }));
    }

    #[test]
    fn rejects_oversized_chunks() {
        let err = WorldConfig::from_json_str(r#"{ "chunk_width": 50000, "grid_size": 1 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "chunk_width", .. }));

        let err = WorldConfig::from_json_str(r#"{ "chunk_width": 1024, "chunk_height": 1024 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "chunk_width", .. }));

        let config = WorldConfig::from_json_str(r#"{ "chunk_width": 256, "chunk_height": 256 }"#).unwrap();
        assert_eq!(config.chunk_layout().volume(), MAX_CHUNK_VOLUME);
    }

    #[test]
    fn rejects_grids_wider_than_the_block_range() {
        let err = WorldConfig::from_json_str(r#"{ "grid_size": 2000000000 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "grid_size", .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = WorldConfig::from_json_str("{ grid_size: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn layout_contains_checks_every_axis() {
        let layout = ChunkLayout::default();
        assert!(layout.contains(0, 0, 0));
        assert!(layout.contains(15, 63, 15));
        assert!(!layout.contains(16, 0, 0));
        assert!(!layout.contains(0, 64, 0));
        assert!(!layout.contains(0, 0, -1));
    }
}
