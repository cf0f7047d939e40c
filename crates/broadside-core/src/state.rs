//! Tick snapshot — the complete visible state published after each tick.
//!
//! Snapshots are immutable once built and superseded by the next tick's
//! snapshot; they are the only channel between the simulation and any
//! renderer or CLI.

use serde::{Deserialize, Serialize};

use crate::components::{ProjectileId, ShipId};
use crate::enums::{MatchOutcome, MatchPhase, ShipClass, Side};
use crate::events::BattleEvent;
use crate::types::{Position, SimTime};

/// Complete state of the match at a tick boundary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TickSnapshot {
    pub time: SimTime,
    pub phase: MatchPhase,
    pub ships: Vec<ShipView>,
    pub projectiles: Vec<ProjectileView>,
    /// Events recorded since the previous tick's snapshot.
    pub events: Vec<BattleEvent>,
    /// Present from the tick the match finished onward.
    pub outcome: Option<MatchOutcome>,
}

impl TickSnapshot {
    pub fn ship(&self, id: ShipId) -> Option<&ShipView> {
        self.ships.iter().find(|s| s.id == id)
    }
}

/// One ship as seen by a renderer or controller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipView {
    pub id: ShipId,
    pub side: Side,
    pub class: ShipClass,
    pub position: Position,
    /// Heading in radians (0 = North, clockwise).
    pub heading: f64,
    /// Speed along the heading (m/s).
    pub speed: f64,
    pub hull_integrity: f64,
    pub hull_max: f64,
    /// Remaining cooldown per weapon slot (ticks; 0 = ready).
    pub cooldowns: Vec<u32>,
}

/// One in-flight projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: ProjectileId,
    pub position: Position,
}
