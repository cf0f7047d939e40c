//! Per-tick simulation systems.
//!
//! The engine invokes these in a fixed order every tick:
//! movement, spatial rebuild, combat, cleanup, snapshot.

pub mod cleanup;
pub mod combat;
pub mod movement;
pub mod snapshot;
