//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic. Logic lives in
//! systems; the registry assigns the stable id components at spawn time.

use serde::{Deserialize, Serialize};

use crate::class::WeaponSpec;
use crate::enums::Side;

/// Stable ship identifier. Assigned by the registry, never reused within
/// a match, and the deterministic tiebreaker wherever ordering matters.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ShipId(pub u32);

/// Stable projectile identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ProjectileId(pub u32);

/// Ship kinematic state: compass heading and scalar speed along it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Kinematics {
    /// Heading in radians (0 = North, clockwise).
    pub heading: f64,
    /// Speed along the heading (m/s, never negative).
    pub speed: f64,
}

/// Hull state. A live ship always has `integrity > 0`; the combat
/// resolver removes the entity when integrity reaches zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hull {
    pub integrity: f64,
    pub max: f64,
    /// Armor rating subtracted from incoming damage (floor at zero).
    pub armor: f64,
}

/// One weapon mount plus its cooldown timer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WeaponMount {
    pub spec: WeaponSpec,
    /// Remaining cooldown in ticks; the mount may fire at zero.
    pub cooldown_remaining: u32,
}

impl WeaponMount {
    pub fn new(spec: WeaponSpec) -> Self {
        Self {
            spec,
            cooldown_remaining: 0,
        }
    }

    pub fn ready(&self) -> bool {
        self.cooldown_remaining == 0
    }
}

/// A ship's full weapon battery, indexed by slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loadout {
    pub slots: Vec<WeaponMount>,
}

/// Position at the start of the current tick, before integration.
/// Gives combat the exact per-tick segment a projectile traversed so a
/// thin terrain wall cannot be tunneled through.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PrevPosition(pub crate::types::Position);

/// Projectile payload and bookkeeping.
///
/// `shooter` is a weak reference: resolution looks the ship up by id and
/// tolerates a shooter destroyed mid-flight. The side is captured at
/// launch so friendly-fire policy survives the shooter's death.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub shooter: ShipId,
    pub shooter_side: Side,
    pub damage: f64,
    pub blast_radius: f64,
    /// Ticks before the round despawns as a miss.
    pub lifetime_remaining: u32,
}
