//! TerrainMap: the scenario's obstacle grid with passability queries.

use broadside_core::errors::SimError;
use broadside_core::scenario::{MapBounds, ScenarioDescriptor};
use broadside_core::types::Position;

/// Per-cell terrain flags, packed into one byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellFlags {
    /// Ships cannot enter this cell.
    pub impassable: bool,
    /// Projectiles are destroyed here and line of sight is broken.
    pub blocks_los: bool,
}

/// Immutable terrain grid shared read-only by movement and combat.
/// Built once from the scenario descriptor; row 0 is the south edge.
#[derive(Debug, Clone)]
pub struct TerrainMap {
    bounds: MapBounds,
    cell_size: f64,
    cols: u32,
    rows: u32,
    cells: Vec<CellFlags>,
}

impl TerrainMap {
    /// Build the terrain map from a validated scenario descriptor.
    pub fn from_scenario(scenario: &ScenarioDescriptor) -> Result<Self, SimError> {
        scenario.validate()?;

        let cols = scenario.grid_cols();
        let rows = scenario.grid_rows();
        let mut cells = vec![CellFlags::default(); (cols * rows) as usize];

        for cell in &scenario.terrain {
            let idx = (cell.row * cols + cell.col) as usize;
            cells[idx] = CellFlags {
                impassable: !cell.passable,
                blocks_los: cell.blocks_los,
            };
        }

        Ok(Self {
            bounds: scenario.bounds,
            cell_size: scenario.cell_size,
            cols,
            rows,
            cells,
        })
    }

    pub fn bounds(&self) -> MapBounds {
        self.bounds
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub fn in_bounds(&self, pos: &Position) -> bool {
        self.bounds.contains(pos)
    }

    /// Grid (col, row) of a position, or None when outside the map.
    fn cell_of(&self, pos: &Position) -> Option<(u32, u32)> {
        if !self.bounds.contains(pos) {
            return None;
        }
        let col = ((pos.x / self.cell_size) as u32).min(self.cols - 1);
        let row = ((pos.y / self.cell_size) as u32).min(self.rows - 1);
        Some((col, row))
    }

    fn flags_at(&self, pos: &Position) -> Option<CellFlags> {
        let (col, row) = self.cell_of(pos)?;
        Some(self.cells[(row * self.cols + col) as usize])
    }

    /// Whether a ship may occupy this position. Outside the map counts
    /// as impassable, so the map edge behaves like terrain.
    pub fn is_passable(&self, pos: &Position) -> bool {
        match self.flags_at(pos) {
            Some(flags) => !flags.impassable,
            None => false,
        }
    }

    /// Whether this position breaks line of sight and stops projectiles.
    pub fn blocks_los(&self, pos: &Position) -> bool {
        self.flags_at(pos).is_some_and(|flags| flags.blocks_los)
    }
}
