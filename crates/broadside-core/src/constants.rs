//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Default tick limit for a match if the scenario does not set one
/// (~10 minutes at 30Hz).
pub const DEFAULT_TICK_LIMIT: u64 = 18_000;

// --- Movement ---

/// Fraction of a terrain cell used as the sub-sampling step when
/// advancing a ship along its heading. Small enough that a ship cannot
/// tunnel through an impassable cell in one integration step.
pub const MOVE_SAMPLE_FRACTION: f64 = 0.5;

// --- Combat ---

/// Sampling interval along a sight line or projectile flight segment
/// when checking for blocking terrain, as a fraction of the cell size.
pub const LOS_SAMPLE_FRACTION: f64 = 0.5;

// --- Spatial index ---

/// Lower bound on the spatial index bucket edge length (meters). Guards
/// against degenerate bucket counts on maps with tiny terrain cells.
pub const SPATIAL_MIN_CELL_SIZE: f64 = 50.0;
