//! The match engine: owns the world and advances it one tick at a time.
//!
//! Each [`MatchEngine::tick`] call drains queued commands, polls attached
//! controllers, runs the per-tick systems in a fixed order and returns a
//! fresh snapshot. Nothing in the tick path reads the wall clock or any
//! unseeded randomness, so two engines built from the same scenario and
//! fed the same commands produce identical snapshot streams.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use broadside_ai::ShipController;
use broadside_core::commands::{FireOrder, HelmOrder, MatchCommand, ShipCommand};
use broadside_core::components::ShipId;
use broadside_core::enums::{MatchOutcome, MatchPhase, Side};
use broadside_core::errors::SimError;
use broadside_core::events::BattleEvent;
use broadside_core::scenario::ScenarioDescriptor;
use broadside_core::state::TickSnapshot;
use broadside_core::types::SimTime;
use broadside_terrain::TerrainMap;
use tracing::{debug, info};

use crate::registry::EntityRegistry;
use crate::spatial::SpatialIndex;
use crate::systems;
use crate::world_setup;

pub struct MatchEngine {
    registry: EntityRegistry,
    terrain: TerrainMap,
    spatial: SpatialIndex,
    time: SimTime,
    phase: MatchPhase,
    friendly_fire: bool,
    tick_limit: u64,
    command_queue: VecDeque<MatchCommand>,
    pending_helm: BTreeMap<ShipId, HelmOrder>,
    pending_fire: BTreeMap<ShipId, FireOrder>,
    commanded: BTreeSet<ShipId>,
    events: Vec<BattleEvent>,
    outcome: Option<MatchOutcome>,
    controllers: Vec<(Side, Box<dyn ShipController>)>,
    last_snapshot: TickSnapshot,
    stop_requested: bool,
}

impl MatchEngine {
    /// Build an engine from a scenario descriptor.
    ///
    /// Validates the descriptor, rasterizes the terrain and spawns the
    /// roster. The engine starts in [`MatchPhase::Running`].
    pub fn new(scenario: &ScenarioDescriptor) -> Result<Self, SimError> {
        let terrain = TerrainMap::from_scenario(scenario)?;
        let mut registry = EntityRegistry::new();
        world_setup::populate(&mut registry, scenario, &terrain)?;

        let mut spatial = SpatialIndex::new(terrain.cell_size());
        spatial.rebuild(&registry);

        let time = SimTime::default();
        let last_snapshot = systems::snapshot::build_snapshot(
            &registry,
            time,
            MatchPhase::Running,
            Vec::new(),
            None,
        );

        info!(
            ships = scenario.roster.len(),
            tick_limit = scenario.tick_limit,
            "match initialized"
        );

        Ok(Self {
            registry,
            terrain,
            spatial,
            time,
            phase: MatchPhase::Running,
            friendly_fire: scenario.friendly_fire,
            tick_limit: scenario.tick_limit,
            command_queue: VecDeque::new(),
            pending_helm: BTreeMap::new(),
            pending_fire: BTreeMap::new(),
            commanded: BTreeSet::new(),
            events: Vec::new(),
            outcome: None,
            controllers: Vec::new(),
            last_snapshot,
            stop_requested: false,
        })
    }

    /// Attach a controller that steers every ship on `side` not covered
    /// by an external command that tick.
    pub fn attach_controller(&mut self, side: Side, controller: Box<dyn ShipController>) {
        self.controllers.push((side, controller));
    }

    /// Queue a command for the next tick.
    pub fn queue_command(&mut self, command: MatchCommand) {
        self.command_queue.push_back(command);
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.outcome
    }

    pub fn terrain(&self) -> &TerrainMap {
        &self.terrain
    }

    /// Snapshot from the most recent tick boundary.
    pub fn last_snapshot(&self) -> &TickSnapshot {
        &self.last_snapshot
    }

    /// Advance the match by one tick and return the resulting snapshot.
    ///
    /// When the match is paused or finished only control commands are
    /// processed; the world does not move and the clock does not advance.
    pub fn tick(&mut self) -> TickSnapshot {
        self.process_commands();

        if self.phase == MatchPhase::Running {
            self.poll_controllers();
            self.run_systems();
            self.time.advance();
            self.evaluate_outcome();
        }

        if self.stop_requested && self.phase != MatchPhase::Finished {
            self.finish(MatchOutcome {
                winner: None,
                final_tick: self.time.tick,
            });
        }
        self.stop_requested = false;

        let snapshot = systems::snapshot::build_snapshot(
            &self.registry,
            self.time,
            self.phase,
            std::mem::take(&mut self.events),
            self.outcome,
        );
        self.last_snapshot = snapshot.clone();
        snapshot
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            match command {
                MatchCommand::Pause => {
                    if self.phase == MatchPhase::Running {
                        self.phase = MatchPhase::Paused;
                        info!(tick = self.time.tick, "match paused");
                    }
                }
                MatchCommand::Resume => {
                    if self.phase == MatchPhase::Paused {
                        self.phase = MatchPhase::Running;
                        info!(tick = self.time.tick, "match resumed");
                    }
                }
                MatchCommand::Stop => {
                    self.stop_requested = true;
                }
                MatchCommand::Ship { ship, command } => {
                    if self.phase == MatchPhase::Running {
                        self.accept_ship_command(ship, command);
                    } else {
                        debug!(ship = ship.0, phase = ?self.phase, "ship command dropped");
                    }
                }
            }
        }
    }

    fn accept_ship_command(&mut self, ship: ShipId, command: ShipCommand) {
        if self.registry.ship_entity(ship).is_none() {
            debug!(ship = ship.0, "command for unknown ship dropped");
            return;
        }
        self.commanded.insert(ship);
        if let Some(helm) = command.helm {
            self.pending_helm.insert(ship, helm);
        }
        if let Some(fire) = command.fire {
            self.pending_fire.insert(ship, fire);
        }
    }

    /// Controllers see the previous tick boundary and only fill in ships
    /// that received no external command.
    fn poll_controllers(&mut self) {
        for (side, controller) in &mut self.controllers {
            for ship in &self.last_snapshot.ships {
                if ship.side != *side || self.commanded.contains(&ship.id) {
                    continue;
                }
                if self.registry.ship_entity(ship.id).is_none() {
                    continue;
                }
                if let Some(command) = controller.command(&self.last_snapshot, &self.terrain, ship)
                {
                    if let Some(helm) = command.helm {
                        self.pending_helm.insert(ship.id, helm);
                    }
                    if let Some(fire) = command.fire {
                        self.pending_fire.insert(ship.id, fire);
                    }
                }
            }
        }
    }

    fn run_systems(&mut self) {
        let helm = std::mem::take(&mut self.pending_helm);
        systems::movement::run(&mut self.registry, &self.terrain, &helm);

        self.spatial.rebuild(&self.registry);

        systems::combat::tick_cooldowns(&mut self.registry);
        let fire = std::mem::take(&mut self.pending_fire);
        for (ship, order) in fire {
            if let Err(err) =
                systems::combat::fire(&mut self.registry, ship, &order, &mut self.events)
            {
                debug!(ship = ship.0, slot = order.slot, error = %err, "fire order rejected");
            }
        }

        systems::combat::run(
            &mut self.registry,
            &self.spatial,
            &self.terrain,
            self.friendly_fire,
            &mut self.events,
        );
        systems::cleanup::run(&mut self.registry, &self.terrain, &mut self.events);

        self.commanded.clear();
    }

    fn evaluate_outcome(&mut self) {
        let (blue, red) = self.registry.side_counts();
        let winner = match (blue, red) {
            (0, 0) => Some(None),
            (0, _) => Some(Some(Side::Red)),
            (_, 0) => Some(Some(Side::Blue)),
            _ if self.time.tick >= self.tick_limit => Some(None),
            _ => None,
        };
        if let Some(winner) = winner {
            self.finish(MatchOutcome {
                winner,
                final_tick: self.time.tick,
            });
        }
    }

    fn finish(&mut self, outcome: MatchOutcome) {
        self.phase = MatchPhase::Finished;
        self.outcome = Some(outcome);
        info!(
            tick = outcome.final_tick,
            winner = ?outcome.winner,
            "match finished"
        );
    }

    #[cfg(test)]
    pub(crate) fn registry_mut(&mut self) -> &mut EntityRegistry {
        &mut self.registry
    }
}
