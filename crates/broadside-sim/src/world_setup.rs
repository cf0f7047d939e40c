//! Scenario instantiation: turns a descriptor roster into live ships.

use broadside_core::errors::SimError;
use broadside_core::scenario::ScenarioDescriptor;
use broadside_terrain::TerrainMap;
use tracing::info;

use crate::registry::EntityRegistry;

/// Spawn every ship in the scenario roster.
///
/// The descriptor is expected to have passed [`ScenarioDescriptor::validate`]
/// already (building the terrain map does that), but placement on an
/// impassable cell is only detectable here and still fails.
pub fn populate(
    registry: &mut EntityRegistry,
    scenario: &ScenarioDescriptor,
    terrain: &TerrainMap,
) -> Result<(), SimError> {
    for placement in &scenario.roster {
        let id = registry.spawn_ship(placement, terrain)?;
        info!(
            ship = id.0,
            side = ?placement.side,
            class = ?placement.class,
            x = placement.position.x,
            y = placement.position.y,
            "ship spawned"
        );
    }
    Ok(())
}
