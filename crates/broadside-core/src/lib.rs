//! Core types and definitions for the BROADSIDE simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, snapshots, events, errors, and constants.
//! It has no dependency on any runtime or rendering framework.

pub mod class;
pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod errors;
pub mod events;
pub mod scenario;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
