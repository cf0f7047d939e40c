//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Faction grouping for win-condition and friendly-fire evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    Blue,
    Red,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Blue => Side::Red,
            Side::Red => Side::Blue,
        }
    }
}

/// Ship class. A closed set of tagged variants; per-class parameters live
/// in the static `ClassSpec` table, keeping movement and combat logic
/// table-driven rather than polymorphic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipClass {
    Destroyer,
    Cruiser,
    Battleship,
}

/// Match lifecycle phase (top-level state machine).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Scenario loaded, registry being populated.
    #[default]
    Initializing,
    /// Ticks are being processed.
    Running,
    /// No state mutation; snapshots still served on request.
    Paused,
    /// Terminal. No further ticks processed.
    Finished,
}

/// Final result of a match, delivered once on reaching `Finished`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// The winning side, or `None` for a draw (tick limit, mutual
    /// elimination, or external stop).
    pub winner: Option<Side>,
    /// Tick at which the match finished.
    pub final_tick: u64,
}
