//! Simulation engine for BROADSIDE.
//!
//! Owns the hecs ECS world behind an entity registry, advances the match
//! one deterministic tick at a time, and produces TickSnapshots for any
//! front end to render.

pub mod engine;
pub mod registry;
pub mod runner;
pub mod spatial;
pub mod systems;
pub mod world_setup;

pub use broadside_core as core;
pub use engine::MatchEngine;

#[cfg(test)]
mod tests;
