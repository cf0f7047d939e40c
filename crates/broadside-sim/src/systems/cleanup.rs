//! Cleanup system: despawns projectiles that left the map.
//!
//! A round flying over the edge can never hit anything again; it is
//! recorded as a miss rather than ticking down its full lifetime.

use broadside_core::components::ProjectileId;
use broadside_core::events::BattleEvent;
use broadside_core::types::Position;
use broadside_terrain::TerrainMap;

use crate::registry::EntityRegistry;

pub fn run(registry: &mut EntityRegistry, terrain: &TerrainMap, events: &mut Vec<BattleEvent>) {
    let mut expired: Vec<ProjectileId> = Vec::new();

    for id in registry.projectile_ids() {
        let Some(entity) = registry.projectile_entity(id) else {
            continue;
        };
        if let Ok(pos) = registry.world().get::<&Position>(entity) {
            if !terrain.in_bounds(&pos) {
                expired.push(id);
            }
        }
    }

    for id in expired {
        events.push(BattleEvent::Miss { projectile: id });
        registry.remove_projectile(id);
    }
}
