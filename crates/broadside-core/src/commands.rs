//! Commands sent from a controller (human relay or AI) to the simulation.
//!
//! Commands are buffered and applied atomically at the next tick boundary,
//! never interleaved within a tick.

use serde::{Deserialize, Serialize};

use crate::components::ShipId;
use crate::types::Position;

/// Helm order: deltas are clamped to the ship class's turn-rate and
/// acceleration limits before being applied.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HelmOrder {
    /// Desired heading change this tick (radians, positive = clockwise).
    pub heading_delta: f64,
    /// Desired speed change this tick (m/s).
    pub speed_delta: f64,
}

/// Target of a fire order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum FireTarget {
    /// Aim at a fixed map point.
    Point(Position),
    /// Aim at a ship's current position at fire time.
    Ship(ShipId),
}

/// Fire order for a single weapon slot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FireOrder {
    pub slot: usize,
    pub target: FireTarget,
}

/// Per-tick, per-ship command. A ship with no command this tick keeps its
/// current heading and speed.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ShipCommand {
    pub helm: Option<HelmOrder>,
    pub fire: Option<FireOrder>,
}

/// All control inputs accepted by the match engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MatchCommand {
    /// Steer or fire with one ship. Dropped while paused.
    Ship { ship: ShipId, command: ShipCommand },
    /// Pause the simulation.
    Pause,
    /// Resume a paused simulation.
    Resume,
    /// Finish the match after completing the in-progress tick.
    Stop,
}
