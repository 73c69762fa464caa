//! # Core Module
//!
//! Shared-ownership handles used by the world grid. Everything in the engine runs on one
//! logical thread, so only the single-threaded variants exist.
//!
//! ## Key Components
//! - `StResource`: Single-threaded reference-counted resource with read-write locking,
//!   used for chunks so a chunk being re-meshed can read its neighbours through the manager
//! - `StSystem`: Single-threaded container for boxed (possibly unsized) collaborators such
//!   as the render/collision mesh sink
//!
//! ## Usage
//! ```rust
//! use voxel_world::core::{StResource, StSystem};
//!
//! let counter = StResource::new(0);
//! *counter.get_mut() += 1;
//! assert_eq!(*counter.get(), 1);
//!
//! let system: StSystem<dyn std::fmt::Debug> = StSystem::new(Box::new(42u32));
//! assert_eq!(format!("{:?}", system.get()), "42");
//! ```

pub mod st_resource;
pub mod st_system;

pub use st_resource::StResource;
pub use st_system::StSystem;
