//! Scenario descriptor — the typed, already-parsed battle definition.
//!
//! Parsing and validating a raw scenario file format is an external
//! loader's responsibility. The core consumes this descriptor once at
//! match start and fails fast with `ScenarioInvalid` if it is malformed.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TICK_LIMIT;
use crate::enums::{ShipClass, Side};
use crate::errors::SimError;
use crate::types::Position;

/// Rectangular map bounds, origin at (0, 0) in the southwest corner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MapBounds {
    /// Map width in meters (East extent).
    pub width: f64,
    /// Map height in meters (North extent).
    pub height: f64,
}

impl MapBounds {
    pub fn contains(&self, pos: &Position) -> bool {
        pos.x >= 0.0 && pos.y >= 0.0 && pos.x < self.width && pos.y < self.height
    }
}

/// One non-water terrain cell. Cells not listed are open water.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TerrainCell {
    pub col: u32,
    pub row: u32,
    /// Ships cannot enter impassable cells.
    pub passable: bool,
    /// Blocking cells stop projectiles and break line of sight.
    pub blocks_los: bool,
}

/// Initial placement of one ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShipPlacement {
    pub class: ShipClass,
    pub side: Side,
    pub position: Position,
    /// Initial heading in radians (0 = North, clockwise).
    pub heading: f64,
}

/// Complete scenario descriptor. Immutable once loaded; consumed once at
/// match start to populate the entity registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioDescriptor {
    pub bounds: MapBounds,
    /// Edge length of one terrain grid cell (meters).
    pub cell_size: f64,
    pub terrain: Vec<TerrainCell>,
    pub roster: Vec<ShipPlacement>,
    /// Match ends in a draw when this tick is reached with both sides alive.
    pub tick_limit: u64,
    /// Whether same-side projectiles damage ships. Default: enabled.
    pub friendly_fire: bool,
}

impl ScenarioDescriptor {
    /// A minimal open-water scenario with the given roster.
    pub fn open_water(width: f64, height: f64, roster: Vec<ShipPlacement>) -> Self {
        Self {
            bounds: MapBounds { width, height },
            cell_size: 100.0,
            terrain: Vec::new(),
            roster,
            tick_limit: DEFAULT_TICK_LIMIT,
            friendly_fire: true,
        }
    }

    /// Number of grid columns implied by the bounds and cell size.
    pub fn grid_cols(&self) -> u32 {
        (self.bounds.width / self.cell_size).ceil() as u32
    }

    /// Number of grid rows implied by the bounds and cell size.
    pub fn grid_rows(&self) -> u32 {
        (self.bounds.height / self.cell_size).ceil() as u32
    }

    /// Structural validation, performed once at match start.
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.bounds.width > 0.0 && self.bounds.height > 0.0) {
            return Err(SimError::ScenarioInvalid(format!(
                "map bounds must be positive, got {}x{}",
                self.bounds.width, self.bounds.height
            )));
        }
        if !(self.cell_size > 0.0) {
            return Err(SimError::ScenarioInvalid(format!(
                "cell size must be positive, got {}",
                self.cell_size
            )));
        }
        if self.tick_limit == 0 {
            return Err(SimError::ScenarioInvalid("tick limit must be nonzero".into()));
        }

        let (cols, rows) = (self.grid_cols(), self.grid_rows());
        for cell in &self.terrain {
            if cell.col >= cols || cell.row >= rows {
                return Err(SimError::ScenarioInvalid(format!(
                    "terrain cell ({}, {}) outside {}x{} grid",
                    cell.col, cell.row, cols, rows
                )));
            }
        }

        for (i, ship) in self.roster.iter().enumerate() {
            if !self.bounds.contains(&ship.position) {
                return Err(SimError::ScenarioInvalid(format!(
                    "roster entry {i} placed outside map bounds at ({}, {})",
                    ship.position.x, ship.position.y
                )));
            }
        }

        for side in [Side::Blue, Side::Red] {
            if !self.roster.iter().any(|s| s.side == side) {
                return Err(SimError::ScenarioInvalid(format!(
                    "roster has no ship on side {side:?}"
                )));
            }
        }

        Ok(())
    }
}
