//! Spatial index — uniform grid over ship positions.
//!
//! Rebuilt once per tick after movement and before combat, so hit
//! detection always sees post-movement positions. Bucketing keeps the
//! per-projectile query cost proportional to the local ship density
//! rather than the fleet size.

use std::collections::HashMap;

use glam::DVec2;

use broadside_core::components::ShipId;
use broadside_core::constants::SPATIAL_MIN_CELL_SIZE;
use broadside_core::types::Position;

use crate::registry::EntityRegistry;

/// Uniform-grid index over live ship positions.
pub struct SpatialIndex {
    cell_size: f64,
    buckets: HashMap<(i64, i64), Vec<(ShipId, DVec2)>>,
}

impl SpatialIndex {
    /// `cell_size` is typically the terrain cell size, floored so tiny
    /// scenario cells do not explode the bucket count.
    pub fn new(cell_size: f64) -> Self {
        Self {
            cell_size: cell_size.max(SPATIAL_MIN_CELL_SIZE),
            buckets: HashMap::new(),
        }
    }

    fn bucket_of(&self, point: DVec2) -> (i64, i64) {
        (
            (point.x / self.cell_size).floor() as i64,
            (point.y / self.cell_size).floor() as i64,
        )
    }

    /// Rebuild the index from the registry's current ship positions.
    pub fn rebuild(&mut self, registry: &EntityRegistry) {
        self.buckets.clear();
        for id in registry.ship_ids() {
            if let Some(pos) = registry.ship_position(id) {
                let v = pos.to_vec();
                self.buckets.entry(self.bucket_of(v)).or_default().push((id, v));
            }
        }
    }

    /// All ships within `radius` of `point`, sorted by id.
    ///
    /// Radius 0 is a legal degenerate query (matches only exact
    /// coincidence). A negative radius is a contract violation.
    pub fn query_radius(&self, point: Position, radius: f64) -> Vec<ShipId> {
        assert!(radius >= 0.0, "negative query radius {radius}");

        let mut out: Vec<ShipId> = Vec::new();
        self.for_candidates(point.to_vec(), radius, |id, dist_sq| {
            if dist_sq <= radius * radius {
                out.push(id);
            }
        });
        out.sort_unstable();
        out
    }

    /// Nearest ship within `radius` of `point` that passes `filter`.
    /// Ties broken by lowest id for determinism.
    pub fn nearest_in_radius(
        &self,
        point: Position,
        radius: f64,
        mut filter: impl FnMut(ShipId) -> bool,
    ) -> Option<ShipId> {
        assert!(radius >= 0.0, "negative query radius {radius}");

        let mut best: Option<(f64, ShipId)> = None;
        self.for_candidates(point.to_vec(), radius, |id, dist_sq| {
            if dist_sq > radius * radius || !filter(id) {
                return;
            }
            let closer = match best {
                None => true,
                Some((best_sq, best_id)) => {
                    dist_sq < best_sq || (dist_sq == best_sq && id < best_id)
                }
            };
            if closer {
                best = Some((dist_sq, id));
            }
        });
        best.map(|(_, id)| id)
    }

    /// Visit every indexed ship in the buckets overlapping the query
    /// circle, passing its squared distance to the query point.
    fn for_candidates(&self, point: DVec2, radius: f64, mut visit: impl FnMut(ShipId, f64)) {
        let (min_cx, min_cy) = self.bucket_of(point - DVec2::splat(radius));
        let (max_cx, max_cy) = self.bucket_of(point + DVec2::splat(radius));

        for cx in min_cx..=max_cx {
            for cy in min_cy..=max_cy {
                if let Some(bucket) = self.buckets.get(&(cx, cy)) {
                    for (id, pos) in bucket {
                        visit(*id, pos.distance_squared(point));
                    }
                }
            }
        }
    }
}
