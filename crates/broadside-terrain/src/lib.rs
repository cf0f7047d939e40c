//! Terrain system for BROADSIDE.
//!
//! Grid-based obstacle map built once from the scenario descriptor,
//! plus segment traversal and line-of-sight queries over it.

pub use broadside_core as core;

pub mod los;
pub mod map;

// Re-export key types for convenience.
pub use los::{first_blocking_point, has_line_of_sight};
pub use map::TerrainMap;
