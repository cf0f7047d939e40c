//! Line-of-sight and segment traversal over the terrain grid.
//!
//! Uses stepped ray sampling at half-cell intervals; a segment shorter
//! than one sample interval is trivially clear.

use glam::DVec2;

use broadside_core::constants::LOS_SAMPLE_FRACTION;
use broadside_core::types::Position;

use crate::map::TerrainMap;

/// Check line-of-sight between two map points.
///
/// Returns true if no LOS-blocking cell lies on the straight segment
/// between `from` and `to`. Identical points are a legal degenerate query.
pub fn has_line_of_sight(map: &TerrainMap, from: &Position, to: &Position) -> bool {
    first_blocking_point(map, from, to).is_none()
}

/// First point along the segment from `from` to `to` that falls inside a
/// LOS-blocking cell, or None if the path is clear. Used both for sight
/// checks and for projectile/terrain collision.
pub fn first_blocking_point(map: &TerrainMap, from: &Position, to: &Position) -> Option<Position> {
    let a = from.to_vec();
    let b = to.to_vec();
    let delta = b - a;
    let dist = delta.length();

    let sample_interval = map.cell_size() * LOS_SAMPLE_FRACTION;
    if dist < f64::EPSILON {
        return blocking_at(map, a);
    }

    let num_samples = (dist / sample_interval).ceil().max(1.0) as usize;
    for i in 0..=num_samples {
        let t = i as f64 / num_samples as f64;
        let sample = a + delta * t;
        if let Some(hit) = blocking_at(map, sample) {
            return Some(hit);
        }
    }

    None
}

fn blocking_at(map: &TerrainMap, point: DVec2) -> Option<Position> {
    let pos = Position::from_vec(point);
    map.blocks_los(&pos).then_some(pos)
}
