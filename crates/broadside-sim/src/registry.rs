//! Entity registry — owns all live ships and projectiles for a match.
//!
//! Wraps the hecs ECS world with stable, never-reused identifiers and
//! ordered id maps so every per-tick iteration is deterministic. Obstacle
//! geometry is not entity data; it lives in the immutable `TerrainMap`.

use std::collections::BTreeMap;

use hecs::{Entity, World};

use broadside_core::components::{
    Hull, Kinematics, Loadout, PrevPosition, Projectile, ProjectileId, ShipId, WeaponMount,
};
use broadside_core::enums::Side;
use broadside_core::errors::SimError;
use broadside_core::scenario::ShipPlacement;
use broadside_core::types::{Position, Velocity};
use broadside_terrain::TerrainMap;

/// Registry of live entities. Ships and projectiles are mutated only by
/// the movement and combat systems; everything else reads.
pub struct EntityRegistry {
    world: World,
    ships: BTreeMap<ShipId, Entity>,
    projectiles: BTreeMap<ProjectileId, Entity>,
    next_ship_id: u32,
    next_projectile_id: u32,
}

impl Default for EntityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            ships: BTreeMap::new(),
            projectiles: BTreeMap::new(),
            next_ship_id: 0,
            next_projectile_id: 0,
        }
    }

    /// Read-only access to the ECS world for systems and snapshots.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access, restricted to the systems in this crate
    /// (and to tests that need to rig component state).
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Spawn a ship from its scenario placement. Fails if the placement
    /// violates map bounds or an impassable cell.
    pub fn spawn_ship(
        &mut self,
        placement: &ShipPlacement,
        terrain: &TerrainMap,
    ) -> Result<ShipId, SimError> {
        if !terrain.is_passable(&placement.position) {
            return Err(SimError::ScenarioInvalid(format!(
                "ship placement at ({}, {}) is on impassable terrain",
                placement.position.x, placement.position.y
            )));
        }

        let spec = placement.class.spec();
        let id = ShipId(self.next_ship_id);
        self.next_ship_id += 1;

        let entity = self.world.spawn((
            id,
            placement.side,
            placement.class,
            placement.position,
            Kinematics {
                heading: placement.heading.rem_euclid(std::f64::consts::TAU),
                speed: 0.0,
            },
            Hull {
                integrity: spec.max_hull,
                max: spec.max_hull,
                armor: spec.armor,
            },
            Loadout {
                slots: spec.loadout.iter().copied().map(WeaponMount::new).collect(),
            },
        ));
        self.ships.insert(id, entity);
        Ok(id)
    }

    /// Spawn a projectile at the shooter's position.
    pub fn spawn_projectile(
        &mut self,
        projectile: Projectile,
        position: Position,
        velocity: Velocity,
    ) -> ProjectileId {
        let id = ProjectileId(self.next_projectile_id);
        self.next_projectile_id += 1;

        let entity = self.world.spawn((
            id,
            projectile,
            position,
            PrevPosition(position),
            velocity,
        ));
        self.projectiles.insert(id, entity);
        id
    }

    /// ECS entity for a live ship, or None if destroyed/unknown.
    pub fn ship_entity(&self, id: ShipId) -> Option<Entity> {
        self.ships.get(&id).copied()
    }

    /// ECS entity for an in-flight projectile.
    pub fn projectile_entity(&self, id: ProjectileId) -> Option<Entity> {
        self.projectiles.get(&id).copied()
    }

    /// Remove a ship. Idempotent: a no-op for ships already absent.
    /// Returns the removed ship's side so the caller can record the
    /// elimination event.
    pub fn remove_ship(&mut self, id: ShipId) -> Option<Side> {
        let entity = self.ships.remove(&id)?;
        let side = self.world.get::<&Side>(entity).map(|s| *s).ok();
        let _ = self.world.despawn(entity);
        side
    }

    /// Remove a projectile. Idempotent.
    pub fn remove_projectile(&mut self, id: ProjectileId) {
        if let Some(entity) = self.projectiles.remove(&id) {
            let _ = self.world.despawn(entity);
        }
    }

    /// Live ship ids in ascending order. Collected up front, so spawns
    /// and removals later in the tick do not perturb an iteration built
    /// from this list.
    pub fn ship_ids(&self) -> Vec<ShipId> {
        self.ships.keys().copied().collect()
    }

    /// In-flight projectile ids in ascending order.
    pub fn projectile_ids(&self) -> Vec<ProjectileId> {
        self.projectiles.keys().copied().collect()
    }

    /// Side of a live ship.
    pub fn ship_side(&self, id: ShipId) -> Option<Side> {
        let entity = self.ship_entity(id)?;
        self.world.get::<&Side>(entity).map(|s| *s).ok()
    }

    /// Current position of a live ship.
    pub fn ship_position(&self, id: ShipId) -> Option<Position> {
        let entity = self.ship_entity(id)?;
        self.world.get::<&Position>(entity).map(|p| *p).ok()
    }

    /// Number of live ships per side: (Blue, Red).
    pub fn side_counts(&self) -> (usize, usize) {
        let mut blue = 0;
        let mut red = 0;
        for entity in self.ships.values() {
            match self.world.get::<&Side>(*entity).map(|s| *s) {
                Ok(Side::Blue) => blue += 1,
                Ok(Side::Red) => red += 1,
                Err(_) => {}
            }
        }
        (blue, red)
    }
}
