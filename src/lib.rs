#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel World
//!
//! A finite, chunked voxel world: a square grid of fixed-size chunks, each holding a dense
//! block grid and a face-culled mesh of its visible block faces.
//!
//! ## Key Modules
//!
//! * `config` - World dimensions, terrain and surface parameters, loaded from JSON
//! * `core` - Single-threaded shared handles used to hold chunks and collaborators
//! * `engine_state` - The root context: world, chunks, meshing, inventory and edit flows
//!
//! ## Architecture
//!
//! * Chunks answer block queries and forward the ones that leave their footprint, one
//!   step, to the chunk manager, which reads the neighbouring chunk's live data
//! * Every edit rebuilds the owning chunk's mesh synchronously, plus the neighbour across
//!   any boundary the edited cell touches
//! * Rebuilt meshes are handed to a `MeshSink`, the render/collision backend boundary
//!
//! ## Usage
//!
//! ```rust
//! use voxel_world::core::StSystem;
//! use voxel_world::engine_state::{rendering::mesh_sink::NullMeshSink, EngineState};
//! use voxel_world::{BlockCoordinate, BlockType, ChunkCoordinate, WorldConfig};
//!
//! let config = WorldConfig { grid_size: 2, ..WorldConfig::default() };
//! let mut engine = EngineState::new(config, StSystem::new(Box::new(NullMeshSink)));
//!
//! let target = BlockCoordinate::new(ChunkCoordinate::new(0, 0), 3, 0, 3);
//! assert_eq!(engine.break_block(&target), Ok(BlockType::Dirt));
//! assert_eq!(engine.inventory.count(BlockType::Dirt), 1);
//! ```

use std::env;

use log::info;

pub mod config;
pub mod core;
pub mod engine_state;

pub use config::{ConfigError, WorldConfig};
pub use engine_state::error::EditError;
pub use engine_state::voxels::block::block_type::BlockType;
pub use engine_state::voxels::coordinates::{BlockCoordinate, ChunkCoordinate};
pub use engine_state::EngineState;

use crate::core::StSystem;
use engine_state::rendering::mesh_sink::LoggingMeshSink;

/// Environment variable naming a JSON configuration file.
pub const CONFIG_ENV_VAR: &str = "VOXEL_WORLD_CONFIG";

/// Builds a world from the configuration named on the command line (or in
/// [`CONFIG_ENV_VAR`], or the defaults), spawns the player and logs a summary.
pub fn run() -> Result<(), ConfigError> {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    let config = load_config(env::args().nth(1).or_else(|| env::var(CONFIG_ENV_VAR).ok()))?;

    let engine = EngineState::new(config, StSystem::new(Box::new(LoggingMeshSink)));
    engine.world.log_summary();
    Ok(())
}

/// Loads the configuration at `path`, or the defaults when no path is given.
pub fn load_config(path: Option<String>) -> Result<WorldConfig, ConfigError> {
    match path {
        Some(path) => {
            info!("Loading world config from {}", path);
            WorldConfig::from_file(path)
        }
        None => {
            info!("No world config given; using defaults");
            Ok(WorldConfig::default())
        }
    }
}
