//! Combat resolver — fire commands, projectile impacts, damage, and
//! destruction.
//!
//! Runs after movement and the spatial rebuild so every hit check sees
//! post-movement positions. All iteration is in ascending id order and
//! ties break to the lowest id, keeping resolution deterministic.

use broadside_core::commands::{FireOrder, FireTarget};
use broadside_core::components::{
    Hull, Kinematics, Loadout, PrevPosition, Projectile, ProjectileId, ShipId,
};
use broadside_core::errors::SimError;
use broadside_core::events::BattleEvent;
use broadside_core::types::{Position, Velocity};
use broadside_terrain::{first_blocking_point, TerrainMap};

use crate::registry::EntityRegistry;
use crate::spatial::SpatialIndex;

/// Decrement every weapon cooldown by one tick. Runs before this tick's
/// fire orders, so a weapon with an N-tick cooldown is ready again
/// exactly N ticks after firing.
pub fn tick_cooldowns(registry: &mut EntityRegistry) {
    for (_entity, loadout) in registry.world_mut().query_mut::<&mut Loadout>() {
        for mount in &mut loadout.slots {
            mount.cooldown_remaining = mount.cooldown_remaining.saturating_sub(1);
        }
    }
}

/// Execute a fire order for one ship.
///
/// Preconditions: the ship must be alive and the slot off cooldown.
/// On success a projectile spawns at the ship's position aimed at the
/// target (a point, or the target ship's current position), and the
/// slot's cooldown resets to its spec duration.
pub fn fire(
    registry: &mut EntityRegistry,
    ship: ShipId,
    order: &FireOrder,
    events: &mut Vec<BattleEvent>,
) -> Result<ProjectileId, SimError> {
    let entity = registry
        .ship_entity(ship)
        .ok_or(SimError::EntityNotFound(ship))?;

    let target_point = match order.target {
        FireTarget::Point(p) => p,
        FireTarget::Ship(target_id) => registry
            .ship_position(target_id)
            .ok_or(SimError::EntityNotFound(target_id))?,
    };

    let (shooter_pos, shooter_heading, shooter_side) = {
        let world = registry.world();
        let pos = *world
            .get::<&Position>(entity)
            .map_err(|_| SimError::EntityNotFound(ship))?;
        let kin = *world
            .get::<&Kinematics>(entity)
            .map_err(|_| SimError::EntityNotFound(ship))?;
        let side = registry.ship_side(ship).ok_or(SimError::EntityNotFound(ship))?;
        (pos, kin.heading, side)
    };

    // Reserve the slot: check cooldown, then reset it.
    let spec = {
        let world = registry.world_mut();
        let mut loadout = world
            .get::<&mut Loadout>(entity)
            .map_err(|_| SimError::EntityNotFound(ship))?;
        let mount = loadout
            .slots
            .get_mut(order.slot)
            .ok_or(SimError::EntityNotFound(ship))?;
        if mount.cooldown_remaining > 0 {
            return Err(SimError::WeaponNotReady {
                ship,
                slot: order.slot,
                remaining_ticks: mount.cooldown_remaining,
            });
        }
        mount.cooldown_remaining = mount.spec.cooldown_ticks();
        mount.spec
    };

    // Aim: degenerate zero-length aim falls back to the ship's heading.
    let aim = target_point.to_vec() - shooter_pos.to_vec();
    let velocity = if aim.length_squared() > f64::EPSILON {
        let dir = aim.normalize();
        Velocity::new(dir.x * spec.muzzle_speed, dir.y * spec.muzzle_speed)
    } else {
        Velocity::from_heading(shooter_heading, spec.muzzle_speed)
    };

    let projectile = registry.spawn_projectile(
        Projectile {
            shooter: ship,
            shooter_side,
            damage: spec.damage,
            blast_radius: spec.blast_radius,
            lifetime_remaining: spec.lifetime_ticks(),
        },
        shooter_pos,
        velocity,
    );

    tracing::debug!(?ship, slot = order.slot, ?projectile, "shot fired");
    events.push(BattleEvent::ShotFired {
        shooter: ship,
        slot: order.slot,
        projectile,
    });
    Ok(projectile)
}

/// Resolve every in-flight projectile against terrain and ships.
pub fn run(
    registry: &mut EntityRegistry,
    spatial: &SpatialIndex,
    terrain: &TerrainMap,
    friendly_fire: bool,
    events: &mut Vec<BattleEvent>,
) {
    for id in registry.projectile_ids() {
        resolve_projectile(registry, spatial, terrain, friendly_fire, id, events);
    }
}

fn resolve_projectile(
    registry: &mut EntityRegistry,
    spatial: &SpatialIndex,
    terrain: &TerrainMap,
    friendly_fire: bool,
    id: ProjectileId,
    events: &mut Vec<BattleEvent>,
) {
    let entity = match registry.projectile_entity(id) {
        Some(e) => e,
        None => return,
    };

    let (pos, prev, projectile) = {
        let world = registry.world();
        let pos = match world.get::<&Position>(entity) {
            Ok(p) => *p,
            Err(_) => return,
        };
        let prev = match world.get::<&PrevPosition>(entity) {
            Ok(p) => p.0,
            Err(_) => return,
        };
        let projectile = match world.get::<&Projectile>(entity) {
            Ok(p) => *p,
            Err(_) => return,
        };
        (pos, prev, projectile)
    };

    // Terrain along this tick's flight segment destroys the round before
    // it can reach any target, causing no damage.
    if first_blocking_point(terrain, &prev, &pos).is_some() {
        tracing::debug!(projectile = ?id, "terrain impact");
        events.push(BattleEvent::TerrainImpact { projectile: id });
        registry.remove_projectile(id);
        return;
    }

    // Nearest qualifying ship inside the blast radius. The shooter's own
    // round never strikes it; same-side hits obey the friendly-fire flag;
    // ships destroyed earlier this tick no longer qualify.
    let target = spatial.nearest_in_radius(pos, projectile.blast_radius, |candidate| {
        if candidate == projectile.shooter {
            return false;
        }
        match registry.ship_side(candidate) {
            Some(side) => friendly_fire || side != projectile.shooter_side,
            None => false,
        }
    });

    if let Some(target_id) = target {
        apply_hit(registry, id, &projectile, target_id, events);
        registry.remove_projectile(id);
        return;
    }

    if projectile.lifetime_remaining == 0 {
        events.push(BattleEvent::Miss { projectile: id });
        registry.remove_projectile(id);
    }
}

/// Apply damage to a struck ship and handle destruction.
fn apply_hit(
    registry: &mut EntityRegistry,
    projectile_id: ProjectileId,
    projectile: &Projectile,
    target_id: ShipId,
    events: &mut Vec<BattleEvent>,
) {
    let entity = match registry.ship_entity(target_id) {
        Some(e) => e,
        None => return,
    };

    let destroyed = {
        let world = registry.world_mut();
        let mut hull = match world.get::<&mut Hull>(entity) {
            Ok(h) => h,
            Err(_) => return,
        };
        // Armor reduces damage, floored at zero — never negative.
        let damage = (projectile.damage - hull.armor).max(0.0);
        hull.integrity = (hull.integrity - damage).max(0.0);
        events.push(BattleEvent::Hit {
            projectile: projectile_id,
            target: target_id,
            damage,
        });
        hull.integrity <= 0.0
    };

    if destroyed {
        if let Some(side) = registry.remove_ship(target_id) {
            tracing::debug!(ship = ?target_id, ?side, "ship destroyed");
            events.push(BattleEvent::ShipDestroyed {
                ship: target_id,
                side,
            });
        }
    }
}
