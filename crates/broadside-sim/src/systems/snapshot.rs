//! Snapshot system: builds a complete TickSnapshot from the world.
//!
//! Read-only — it never modifies the registry. Views are emitted in
//! ascending id order so serialized snapshots are directly comparable.

use broadside_core::components::{Hull, Kinematics, Loadout};
use broadside_core::enums::{MatchOutcome, MatchPhase, ShipClass, Side};
use broadside_core::events::BattleEvent;
use broadside_core::state::{ProjectileView, ShipView, TickSnapshot};
use broadside_core::types::{Position, SimTime};

use crate::registry::EntityRegistry;

/// Build the snapshot for the current tick boundary.
pub fn build_snapshot(
    registry: &EntityRegistry,
    time: SimTime,
    phase: MatchPhase,
    events: Vec<BattleEvent>,
    outcome: Option<MatchOutcome>,
) -> TickSnapshot {
    TickSnapshot {
        time,
        phase,
        ships: build_ships(registry),
        projectiles: build_projectiles(registry),
        events,
        outcome,
    }
}

fn build_ships(registry: &EntityRegistry) -> Vec<ShipView> {
    let mut ships = Vec::new();
    for id in registry.ship_ids() {
        let Some(entity) = registry.ship_entity(id) else {
            continue;
        };
        let mut query = match registry
            .world()
            .query_one::<(&Side, &ShipClass, &Position, &Kinematics, &Hull, &Loadout)>(entity)
        {
            Ok(q) => q,
            Err(_) => continue,
        };
        if let Some((side, class, pos, kin, hull, loadout)) = query.get() {
            ships.push(ShipView {
                id,
                side: *side,
                class: *class,
                position: *pos,
                heading: kin.heading,
                speed: kin.speed,
                hull_integrity: hull.integrity,
                hull_max: hull.max,
                cooldowns: loadout.slots.iter().map(|m| m.cooldown_remaining).collect(),
            });
        }
    }
    ships
}

fn build_projectiles(registry: &EntityRegistry) -> Vec<ProjectileView> {
    let mut projectiles = Vec::new();
    for id in registry.projectile_ids() {
        let Some(entity) = registry.projectile_entity(id) else {
            continue;
        };
        if let Ok(pos) = registry.world().get::<&Position>(entity) {
            projectiles.push(ProjectileView {
                id,
                position: *pos,
            });
        }
    }
    projectiles
}
