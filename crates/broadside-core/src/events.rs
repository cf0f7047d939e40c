//! Events emitted by the simulation, reported in each tick's snapshot.

use serde::{Deserialize, Serialize};

use crate::components::{ProjectileId, ShipId};
use crate::enums::Side;

/// Observable battle events since the previous tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BattleEvent {
    /// A weapon fired and spawned a projectile.
    ShotFired {
        shooter: ShipId,
        slot: usize,
        projectile: ProjectileId,
    },
    /// A projectile struck a ship.
    Hit {
        projectile: ProjectileId,
        target: ShipId,
        /// Damage actually applied (payload minus armor, floored at zero).
        damage: f64,
    },
    /// A projectile expired without striking anything.
    Miss { projectile: ProjectileId },
    /// A projectile was destroyed by blocking terrain, causing no damage.
    TerrainImpact { projectile: ProjectileId },
    /// A ship's hull reached zero and it was removed from the match.
    ShipDestroyed { ship: ShipId, side: Side },
}
