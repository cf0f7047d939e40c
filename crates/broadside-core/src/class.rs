//! Static parameter tables for ship classes and weapons.
//!
//! Movement and combat stay switch/table-driven: a `ShipClass` tag indexes
//! into a `ClassSpec`, never into a type hierarchy.

use serde::{Deserialize, Serialize};

use crate::constants::DT;
use crate::enums::ShipClass;

/// Parameters of a single weapon mount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponSpec {
    /// Damage applied on a hit, before armor reduction.
    pub damage: f64,
    /// Radius within which a ship qualifies as hit (meters).
    pub blast_radius: f64,
    /// Projectile speed (m/s).
    pub muzzle_speed: f64,
    /// Maximum range (meters). Determines projectile lifetime.
    pub range: f64,
    /// Cooldown between shots (seconds).
    pub cooldown_secs: f64,
}

impl WeaponSpec {
    /// Ticks a projectile from this weapon stays alive before despawning.
    pub fn lifetime_ticks(&self) -> u32 {
        (self.range / self.muzzle_speed / DT).ceil() as u32
    }

    /// Cooldown duration in ticks.
    pub fn cooldown_ticks(&self) -> u32 {
        (self.cooldown_secs / DT).ceil() as u32
    }
}

/// Per-class performance and defensive parameters.
#[derive(Debug, Clone, Copy)]
pub struct ClassSpec {
    /// Maximum speed (m/s).
    pub max_speed: f64,
    /// Maximum acceleration (m/s²).
    pub accel: f64,
    /// Maximum turn rate (rad/s).
    pub turn_rate: f64,
    /// Armor rating subtracted from incoming damage.
    pub armor: f64,
    /// Hull integrity at full health.
    pub max_hull: f64,
    /// Weapon mounts, indexed by slot.
    pub loadout: &'static [WeaponSpec],
}

/// 127mm dual-purpose gun: fast cycling, light hitting.
pub const GUN_127MM: WeaponSpec = WeaponSpec {
    damage: 15.0,
    blast_radius: 20.0,
    muzzle_speed: 800.0,
    range: 12_000.0,
    cooldown_secs: 2.0,
};

/// 203mm cruiser gun.
pub const GUN_203MM: WeaponSpec = WeaponSpec {
    damage: 35.0,
    blast_radius: 30.0,
    muzzle_speed: 850.0,
    range: 18_000.0,
    cooldown_secs: 4.0,
};

/// 406mm battleship main battery.
pub const GUN_406MM: WeaponSpec = WeaponSpec {
    damage: 60.0,
    blast_radius: 40.0,
    muzzle_speed: 820.0,
    range: 30_000.0,
    cooldown_secs: 8.0,
};

const DESTROYER_LOADOUT: &[WeaponSpec] = &[GUN_127MM, GUN_127MM];
const CRUISER_LOADOUT: &[WeaponSpec] = &[GUN_203MM, GUN_127MM];
const BATTLESHIP_LOADOUT: &[WeaponSpec] = &[GUN_406MM, GUN_203MM, GUN_127MM];

const DESTROYER_SPEC: ClassSpec = ClassSpec {
    max_speed: 18.0,
    accel: 2.0,
    turn_rate: 0.15,
    armor: 10.0,
    max_hull: 40.0,
    loadout: DESTROYER_LOADOUT,
};

const CRUISER_SPEC: ClassSpec = ClassSpec {
    max_speed: 16.0,
    accel: 1.5,
    turn_rate: 0.10,
    armor: 25.0,
    max_hull: 80.0,
    loadout: CRUISER_LOADOUT,
};

const BATTLESHIP_SPEC: ClassSpec = ClassSpec {
    max_speed: 14.0,
    accel: 1.0,
    turn_rate: 0.06,
    armor: 40.0,
    max_hull: 140.0,
    loadout: BATTLESHIP_LOADOUT,
};

impl ShipClass {
    /// Static parameter table lookup for this class.
    pub fn spec(self) -> &'static ClassSpec {
        match self {
            ShipClass::Destroyer => &DESTROYER_SPEC,
            ShipClass::Cruiser => &CRUISER_SPEC,
            ShipClass::Battleship => &BATTLESHIP_SPEC,
        }
    }
}
