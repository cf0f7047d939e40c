//! Decision interface for BROADSIDE.
//!
//! Defines the controller boundary through which commands reach the
//! simulation each tick, plus a table-driven gunnery AI implementation.
//! Human front ends bypass controllers and queue commands directly.

pub mod controller;
pub mod gunnery;

pub use broadside_core as core;
pub use controller::ShipController;
pub use gunnery::GunneryAi;
