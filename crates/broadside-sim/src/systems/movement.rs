//! Movement engine — fixed-timestep kinematic integration.
//!
//! Ships advance along their heading with class-clamped helm orders;
//! terrain and the map edge stop a ship at the boundary (position
//! clamped, speed zeroed) rather than rejecting the move. Projectiles
//! fly straight at constant velocity. No wall clock, no randomness:
//! identical inputs produce bit-identical positions.

use std::collections::BTreeMap;

use glam::DVec2;

use broadside_core::commands::HelmOrder;
use broadside_core::components::{Kinematics, PrevPosition, Projectile, ShipId};
use broadside_core::constants::{DT, MOVE_SAMPLE_FRACTION};
use broadside_core::enums::ShipClass;
use broadside_core::types::{Position, Velocity};
use broadside_terrain::TerrainMap;

use crate::registry::EntityRegistry;

/// Advance all ships and projectiles by one tick.
///
/// `orders` holds this tick's helm orders; a ship without one keeps its
/// current heading and speed.
pub fn run(
    registry: &mut EntityRegistry,
    terrain: &TerrainMap,
    orders: &BTreeMap<ShipId, HelmOrder>,
) {
    run_ships(registry, terrain, orders);
    run_projectiles(registry);
}

fn run_ships(
    registry: &mut EntityRegistry,
    terrain: &TerrainMap,
    orders: &BTreeMap<ShipId, HelmOrder>,
) {
    for (_entity, (id, class, pos, kin)) in registry
        .world_mut()
        .query_mut::<(&ShipId, &ShipClass, &mut Position, &mut Kinematics)>()
    {
        let spec = class.spec();

        if let Some(order) = orders.get(id) {
            let max_turn = spec.turn_rate * DT;
            kin.heading = (kin.heading + order.heading_delta.clamp(-max_turn, max_turn))
                .rem_euclid(std::f64::consts::TAU);

            let max_accel = spec.accel * DT;
            kin.speed =
                (kin.speed + order.speed_delta.clamp(-max_accel, max_accel)).clamp(0.0, spec.max_speed);
        }

        advance_ship(pos, kin, terrain);
    }
}

/// Integrate one ship along its heading, sub-sampling the path at
/// half-cell granularity so it cannot tunnel through a blocked cell.
fn advance_ship(pos: &mut Position, kin: &mut Kinematics, terrain: &TerrainMap) {
    let dist = kin.speed * DT;
    if dist <= 0.0 {
        return;
    }

    let dir = DVec2::new(kin.heading.sin(), kin.heading.cos());
    let start = pos.to_vec();

    let step = terrain.cell_size() * MOVE_SAMPLE_FRACTION;
    let num_samples = (dist / step).ceil().max(1.0) as usize;

    let mut last_free = start;
    let mut blocked = false;
    for i in 1..=num_samples {
        let t = i as f64 / num_samples as f64;
        let sample = start + dir * (dist * t);
        if terrain.is_passable(&Position::from_vec(sample)) {
            last_free = sample;
        } else {
            blocked = true;
            break;
        }
    }

    *pos = Position::from_vec(last_free);
    if blocked {
        // Terrain collision is a physical event, not a command error.
        kin.speed = 0.0;
    }
}

fn run_projectiles(registry: &mut EntityRegistry) {
    for (_entity, (pos, prev, vel, projectile)) in registry
        .world_mut()
        .query_mut::<(&mut Position, &mut PrevPosition, &Velocity, &mut Projectile)>()
    {
        prev.0 = *pos;
        pos.x += vel.x * DT;
        pos.y += vel.y * DT;
        projectile.lifetime_remaining = projectile.lifetime_remaining.saturating_sub(1);
    }
}
