//! Error taxonomy for the simulation core.
//!
//! Routine gameplay outcomes (misses, terrain bumps, boundary clamps) are
//! state transitions, not errors. Only scenario-load structural problems
//! are fatal; per-command errors are reported to the issuer and otherwise
//! ignored by the scheduler.

use thiserror::Error;

use crate::components::ShipId;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Malformed or out-of-bounds scenario. Fatal to match start.
    #[error("invalid scenario: {0}")]
    ScenarioInvalid(String),

    /// Fire command rejected because the weapon slot is still cycling.
    /// Non-fatal; the command simply has no effect this tick.
    #[error("ship {ship:?} slot {slot} not ready ({remaining_ticks} ticks remaining)")]
    WeaponNotReady {
        ship: ShipId,
        slot: usize,
        remaining_ticks: u32,
    },

    /// Command references a destroyed or unknown ship. Non-fatal; the
    /// command is dropped.
    #[error("ship {0:?} not found")]
    EntityNotFound(ShipId),
}
