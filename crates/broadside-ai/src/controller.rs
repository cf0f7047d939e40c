//! The controller capability boundary.

use broadside_core::commands::ShipCommand;
use broadside_core::state::{ShipView, TickSnapshot};
use broadside_terrain::TerrainMap;

/// A command source for one side's ships, polled once per tick.
///
/// Controllers see only the public tick snapshot and the immutable
/// terrain map — the same information a renderer gets — so an AI and a
/// human input relay are interchangeable behind this trait.
pub trait ShipController: Send {
    /// Produce a command for one of this controller's ships, or None to
    /// let the ship continue on its current heading and speed.
    fn command(
        &mut self,
        snapshot: &TickSnapshot,
        terrain: &TerrainMap,
        ship: &ShipView,
    ) -> Option<ShipCommand>;
}
