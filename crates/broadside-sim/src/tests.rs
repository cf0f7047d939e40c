use std::f64::consts::PI;

use broadside_ai::{GunneryAi, ShipController};
use broadside_core::commands::{FireOrder, FireTarget, HelmOrder, MatchCommand, ShipCommand};
use broadside_core::components::{Loadout, ShipId};
use broadside_core::constants::DT;
use broadside_core::enums::{MatchPhase, ShipClass, Side};
use broadside_core::errors::SimError;
use broadside_core::events::BattleEvent;
use broadside_core::scenario::{ScenarioDescriptor, ShipPlacement, TerrainCell};
use broadside_core::state::{ShipView, TickSnapshot};
use broadside_core::types::Position;
use broadside_terrain::TerrainMap;

use crate::engine::MatchEngine;
use crate::registry::EntityRegistry;
use crate::runner;
use crate::spatial::SpatialIndex;
use crate::systems;

fn placement(class: ShipClass, side: Side, x: f64, y: f64, heading: f64) -> ShipPlacement {
    ShipPlacement {
        class,
        side,
        position: Position::new(x, y),
        heading,
    }
}

/// Two stationary destroyers on the same east-west line, `dist` apart.
fn duel(dist: f64) -> ScenarioDescriptor {
    ScenarioDescriptor::open_water(
        20_000.0,
        20_000.0,
        vec![
            placement(ShipClass::Destroyer, Side::Blue, 5_000.0, 5_000.0, PI / 2.0),
            placement(ShipClass::Destroyer, Side::Red, 5_000.0 + dist, 5_000.0, 1.5 * PI),
        ],
    )
}

fn ship_command(ship: ShipId, helm: Option<HelmOrder>, fire: Option<FireOrder>) -> MatchCommand {
    MatchCommand::Ship {
        ship,
        command: ShipCommand { helm, fire },
    }
}

fn fire_at(ship: ShipId, slot: usize, target: Position) -> MatchCommand {
    ship_command(
        ship,
        None,
        Some(FireOrder {
            slot,
            target: FireTarget::Point(target),
        }),
    )
}

fn full_ahead(ship: ShipId) -> MatchCommand {
    ship_command(
        ship,
        Some(HelmOrder {
            heading_delta: 0.0,
            speed_delta: f64::INFINITY,
        }),
        None,
    )
}

fn events_of<'a>(snap: &'a TickSnapshot) -> &'a [BattleEvent] {
    &snap.events
}

fn has_hit(snap: &TickSnapshot) -> bool {
    events_of(snap)
        .iter()
        .any(|e| matches!(e, BattleEvent::Hit { .. }))
}

// ---------------------------------------------------------------- registry

#[test]
fn ship_ids_are_never_reused() {
    let scenario = duel(100.0);
    let terrain = TerrainMap::from_scenario(&scenario).unwrap();
    let mut registry = EntityRegistry::new();

    let a = registry
        .spawn_ship(&scenario.roster[0], &terrain)
        .unwrap();
    let b = registry
        .spawn_ship(&scenario.roster[1], &terrain)
        .unwrap();
    assert_eq!((a, b), (ShipId(0), ShipId(1)));

    assert_eq!(registry.remove_ship(a), Some(Side::Blue));
    // Removal is idempotent.
    assert_eq!(registry.remove_ship(a), None);

    let c = registry
        .spawn_ship(&scenario.roster[0], &terrain)
        .unwrap();
    assert_eq!(c, ShipId(2));
    assert_eq!(registry.ship_ids(), vec![ShipId(1), ShipId(2)]);
}

#[test]
fn spawn_on_impassable_terrain_is_rejected() {
    let mut scenario = duel(100.0);
    // Make the blue ship's cell land.
    scenario.terrain.push(TerrainCell {
        col: 50,
        row: 50,
        passable: false,
        blocks_los: false,
    });
    let terrain = TerrainMap::from_scenario(&scenario).unwrap();
    let mut registry = EntityRegistry::new();

    let err = registry.spawn_ship(&scenario.roster[0], &terrain);
    assert!(matches!(err, Err(SimError::ScenarioInvalid(_))));
}

#[test]
fn side_counts_track_removals() {
    let scenario = duel(100.0);
    let terrain = TerrainMap::from_scenario(&scenario).unwrap();
    let mut registry = EntityRegistry::new();
    let blue = registry.spawn_ship(&scenario.roster[0], &terrain).unwrap();
    registry.spawn_ship(&scenario.roster[1], &terrain).unwrap();

    assert_eq!(registry.side_counts(), (1, 1));
    registry.remove_ship(blue);
    assert_eq!(registry.side_counts(), (0, 1));
}

// ----------------------------------------------------------------- spatial

#[test]
fn query_radius_returns_sorted_ids() {
    let scenario = ScenarioDescriptor::open_water(
        2_000.0,
        2_000.0,
        vec![
            placement(ShipClass::Destroyer, Side::Blue, 100.0, 200.0, 0.0),
            placement(ShipClass::Destroyer, Side::Red, 300.0, 200.0, 0.0),
            placement(ShipClass::Destroyer, Side::Red, 1_500.0, 1_500.0, 0.0),
        ],
    );
    let terrain = TerrainMap::from_scenario(&scenario).unwrap();
    let mut registry = EntityRegistry::new();
    for p in &scenario.roster {
        registry.spawn_ship(p, &terrain).unwrap();
    }
    let mut spatial = SpatialIndex::new(100.0);
    spatial.rebuild(&registry);

    let near = spatial.query_radius(Position::new(200.0, 200.0), 150.0);
    assert_eq!(near, vec![ShipId(0), ShipId(1)]);
    assert!(spatial
        .query_radius(Position::new(200.0, 200.0), 50.0)
        .is_empty());
}

#[test]
fn nearest_tie_breaks_to_lowest_id() {
    let scenario = ScenarioDescriptor::open_water(
        2_000.0,
        2_000.0,
        vec![
            placement(ShipClass::Destroyer, Side::Blue, 100.0, 200.0, 0.0),
            placement(ShipClass::Destroyer, Side::Red, 300.0, 200.0, 0.0),
        ],
    );
    let terrain = TerrainMap::from_scenario(&scenario).unwrap();
    let mut registry = EntityRegistry::new();
    for p in &scenario.roster {
        registry.spawn_ship(p, &terrain).unwrap();
    }
    let mut spatial = SpatialIndex::new(100.0);
    spatial.rebuild(&registry);

    // Both ships are exactly 100 m from the query point.
    let nearest = spatial.nearest_in_radius(Position::new(200.0, 200.0), 150.0, |_| true);
    assert_eq!(nearest, Some(ShipId(0)));
}

#[test]
#[should_panic]
fn negative_radius_panics() {
    let spatial = SpatialIndex::new(100.0);
    spatial.query_radius(Position::new(0.0, 0.0), -1.0);
}

// ---------------------------------------------------------------- movement

#[test]
fn helm_orders_are_clamped_to_class_limits() {
    let mut engine = MatchEngine::new(&duel(5_000.0)).unwrap();
    let spec = ShipClass::Destroyer.spec();

    engine.queue_command(ship_command(
        ShipId(0),
        Some(HelmOrder {
            heading_delta: 1.0,
            speed_delta: f64::INFINITY,
        }),
        None,
    ));
    let snap = engine.tick();
    let blue = snap.ship(ShipId(0)).unwrap();

    assert!((blue.speed - spec.accel * DT).abs() < 1e-12);
    assert!((blue.heading - (PI / 2.0 + spec.turn_rate * DT)).abs() < 1e-12);
}

#[test]
fn kinematic_state_persists_without_orders() {
    let mut engine = MatchEngine::new(&duel(5_000.0)).unwrap();
    engine.queue_command(full_ahead(ShipId(0)));
    let speed_after_order = engine.tick().ship(ShipId(0)).unwrap().speed;

    // No further orders; the ship holds its speed and keeps moving.
    let snap = engine.tick();
    let blue = snap.ship(ShipId(0)).unwrap();
    assert_eq!(blue.speed, speed_after_order);
    assert!(blue.position.x > 5_000.0);
}

#[test]
fn ship_stops_at_impassable_cell_boundary() {
    let mut scenario = ScenarioDescriptor::open_water(
        1_000.0,
        1_000.0,
        vec![
            placement(ShipClass::Destroyer, Side::Blue, 450.0, 550.0, PI / 2.0),
            placement(ShipClass::Destroyer, Side::Red, 50.0, 50.0, 0.0),
        ],
    );
    // A shoal directly east of the blue ship, at x in [500, 600).
    scenario.terrain.push(TerrainCell {
        col: 5,
        row: 5,
        passable: false,
        blocks_los: false,
    });
    let mut engine = MatchEngine::new(&scenario).unwrap();

    let mut last = None;
    for _ in 0..400 {
        engine.queue_command(full_ahead(ShipId(0)));
        last = Some(engine.tick());
    }
    let snap = last.unwrap();
    let blue = snap.ship(ShipId(0)).unwrap();

    assert!(blue.position.x < 500.0, "ship entered the shoal cell");
    assert!(blue.position.x > 450.0, "ship never moved");
    assert_eq!(blue.speed, 0.0);
    assert!((blue.position.y - 550.0).abs() < 1e-9);
}

#[test]
fn map_edge_stops_ships_like_terrain() {
    let scenario = ScenarioDescriptor::open_water(
        1_000.0,
        1_000.0,
        vec![
            placement(ShipClass::Destroyer, Side::Blue, 970.0, 500.0, PI / 2.0),
            placement(ShipClass::Destroyer, Side::Red, 50.0, 50.0, 0.0),
        ],
    );
    let mut engine = MatchEngine::new(&scenario).unwrap();

    let mut last = None;
    for _ in 0..400 {
        engine.queue_command(full_ahead(ShipId(0)));
        last = Some(engine.tick());
    }
    let blue_view = last.unwrap();
    let blue = blue_view.ship(ShipId(0)).unwrap();
    assert!(blue.position.x < 1_000.0);
    assert_eq!(blue.speed, 0.0);
}

// ------------------------------------------------------------------ combat

#[test]
fn cooldown_starts_on_fire_and_expires_after_spec_ticks() {
    let mut engine = MatchEngine::new(&duel(5_000.0)).unwrap();
    let cooldown = ShipClass::Destroyer.spec().loadout[0].cooldown_ticks();

    // Fire away from the enemy so the round cannot interfere.
    engine.queue_command(fire_at(ShipId(0), 0, Position::new(5_000.0, 15_000.0)));
    let snap = engine.tick();
    assert!(events_of(&snap)
        .iter()
        .any(|e| matches!(e, BattleEvent::ShotFired { shooter, slot: 0, .. } if *shooter == ShipId(0))));
    assert_eq!(snap.ship(ShipId(0)).unwrap().cooldowns[0], cooldown);

    // The slot rejects a second order while cycling.
    let mut events = Vec::new();
    let order = FireOrder {
        slot: 0,
        target: FireTarget::Point(Position::new(5_000.0, 15_000.0)),
    };
    let err = systems::combat::fire(engine.registry_mut(), ShipId(0), &order, &mut events);
    assert!(matches!(
        err,
        Err(SimError::WeaponNotReady {
            ship: ShipId(0),
            slot: 0,
            remaining_ticks,
        }) if remaining_ticks == cooldown
    ));

    for _ in 0..cooldown {
        engine.tick();
    }
    assert_eq!(engine.last_snapshot().ship(ShipId(0)).unwrap().cooldowns[0], 0);
}

#[test]
fn unknown_weapon_slot_is_entity_not_found() {
    let mut engine = MatchEngine::new(&duel(5_000.0)).unwrap();
    let mut events = Vec::new();
    let order = FireOrder {
        slot: 9,
        target: FireTarget::Point(Position::new(0.0, 0.0)),
    };
    let err = systems::combat::fire(engine.registry_mut(), ShipId(0), &order, &mut events);
    assert!(matches!(err, Err(SimError::EntityNotFound(ShipId(0)))));

    let err = systems::combat::fire(engine.registry_mut(), ShipId(9), &order, &mut events);
    assert!(matches!(err, Err(SimError::EntityNotFound(ShipId(9)))));
    assert!(events.is_empty());
}

#[test]
fn hit_applies_armor_reduced_damage() {
    // Point-blank: the round spawns inside the target's blast radius and
    // resolves the same tick it is fired.
    let mut engine = MatchEngine::new(&duel(15.0)).unwrap();
    let spec = ShipClass::Destroyer.spec();

    engine.queue_command(fire_at(ShipId(0), 0, Position::new(5_015.0, 5_000.0)));
    let snap = engine.tick();

    let expected = spec.loadout[0].damage - spec.armor;
    let hit = events_of(&snap).iter().find_map(|e| match e {
        BattleEvent::Hit { target, damage, .. } => Some((*target, *damage)),
        _ => None,
    });
    assert_eq!(hit, Some((ShipId(1), expected)));
    assert_eq!(
        snap.ship(ShipId(1)).unwrap().hull_integrity,
        spec.max_hull - expected
    );
    // The shooter is closer to the round than the target, but its own
    // round never strikes it.
    assert_eq!(snap.ship(ShipId(0)).unwrap().hull_integrity, spec.max_hull);
}

#[test]
fn projectile_flies_between_ticks_before_hitting() {
    // 80 m apart at 800 m/s: the round covers ~26.7 m per tick and
    // reaches the target on its fourth tick.
    let mut engine = MatchEngine::new(&duel(80.0)).unwrap();
    engine.queue_command(fire_at(ShipId(0), 0, Position::new(5_080.0, 5_000.0)));

    let first = engine.tick();
    assert!(!has_hit(&first));
    assert_eq!(first.projectiles.len(), 1);

    let mut hit_tick = None;
    for _ in 0..10 {
        let snap = engine.tick();
        if has_hit(&snap) {
            hit_tick = Some(snap.time.tick);
            break;
        }
    }
    assert_eq!(hit_tick, Some(4));
    assert!(engine.last_snapshot().projectiles.is_empty());
}

#[test]
fn destruction_and_outcome_land_in_the_same_tick() {
    let mut engine = MatchEngine::new(&duel(15.0)).unwrap();

    // A 50-damage round against 10 armor takes the full 40-point
    // destroyer hull in one hit.
    {
        let registry = engine.registry_mut();
        let entity = registry.ship_entity(ShipId(0)).unwrap();
        registry
            .world_mut()
            .get::<&mut Loadout>(entity)
            .unwrap()
            .slots[0]
            .spec
            .damage = 50.0;
    }

    engine.queue_command(fire_at(ShipId(0), 0, Position::new(5_015.0, 5_000.0)));
    let snap = engine.tick();

    assert!(events_of(&snap).iter().any(|e| matches!(
        e,
        BattleEvent::Hit { target: ShipId(1), damage, .. } if *damage == 40.0
    )));
    assert!(events_of(&snap).iter().any(|e| matches!(
        e,
        BattleEvent::ShipDestroyed {
            ship: ShipId(1),
            side: Side::Red,
        }
    )));
    assert_eq!(snap.phase, MatchPhase::Finished);
    let outcome = snap.outcome.unwrap();
    assert_eq!(outcome.winner, Some(Side::Blue));
    assert_eq!(outcome.final_tick, snap.time.tick);
    assert!(snap.ship(ShipId(1)).is_none());
}

#[test]
fn terrain_destroys_projectile_with_no_damage() {
    let mut scenario = ScenarioDescriptor::open_water(
        1_000.0,
        1_000.0,
        vec![
            placement(ShipClass::Destroyer, Side::Blue, 250.0, 450.0, PI / 2.0),
            placement(ShipClass::Destroyer, Side::Red, 750.0, 450.0, 1.5 * PI),
        ],
    );
    // A ridge wall between the ships, x in [500, 600).
    for row in 0..10 {
        scenario.terrain.push(TerrainCell {
            col: 5,
            row,
            passable: false,
            blocks_los: true,
        });
    }
    let mut engine = MatchEngine::new(&scenario).unwrap();
    engine.queue_command(fire_at(ShipId(0), 0, Position::new(750.0, 450.0)));

    let mut impact = false;
    for _ in 0..30 {
        let snap = engine.tick();
        assert!(!has_hit(&snap));
        if events_of(&snap)
            .iter()
            .any(|e| matches!(e, BattleEvent::TerrainImpact { .. }))
        {
            impact = true;
            break;
        }
    }
    assert!(impact, "round never struck the ridge");
    assert!(engine.last_snapshot().projectiles.is_empty());
    let red = engine.last_snapshot().ship(ShipId(1)).unwrap();
    assert_eq!(red.hull_integrity, red.hull_max);
}

#[test]
fn offmap_projectile_despawns_as_miss() {
    let scenario = ScenarioDescriptor::open_water(
        1_000.0,
        1_000.0,
        vec![
            placement(ShipClass::Destroyer, Side::Blue, 950.0, 500.0, PI / 2.0),
            placement(ShipClass::Destroyer, Side::Red, 100.0, 100.0, 0.0),
        ],
    );
    let mut engine = MatchEngine::new(&scenario).unwrap();
    engine.queue_command(fire_at(ShipId(0), 0, Position::new(2_000.0, 500.0)));

    let mut missed = false;
    for _ in 0..5 {
        let snap = engine.tick();
        if events_of(&snap)
            .iter()
            .any(|e| matches!(e, BattleEvent::Miss { .. }))
        {
            missed = true;
            break;
        }
    }
    assert!(missed, "round left the map without a miss event");
    assert!(engine.last_snapshot().projectiles.is_empty());
}

#[test]
fn friendly_fire_flag_gates_same_side_hits() {
    let roster = vec![
        placement(ShipClass::Destroyer, Side::Blue, 5_000.0, 5_000.0, PI / 2.0),
        placement(ShipClass::Destroyer, Side::Blue, 5_015.0, 5_000.0, 1.5 * PI),
        placement(ShipClass::Destroyer, Side::Red, 15_000.0, 15_000.0, 0.0),
    ];

    let mut safe = ScenarioDescriptor::open_water(20_000.0, 20_000.0, roster.clone());
    safe.friendly_fire = false;
    let mut engine = MatchEngine::new(&safe).unwrap();
    engine.queue_command(fire_at(ShipId(0), 0, Position::new(5_015.0, 5_000.0)));
    for _ in 0..10 {
        let snap = engine.tick();
        assert!(!has_hit(&snap));
    }
    let wingman = engine.last_snapshot().ship(ShipId(1)).unwrap();
    assert_eq!(wingman.hull_integrity, wingman.hull_max);

    let live = ScenarioDescriptor::open_water(20_000.0, 20_000.0, roster);
    let mut engine = MatchEngine::new(&live).unwrap();
    engine.queue_command(fire_at(ShipId(0), 0, Position::new(5_015.0, 5_000.0)));
    let snap = engine.tick();
    assert!(has_hit(&snap));
}

#[test]
fn hull_integrity_never_increases() {
    let mut engine = MatchEngine::new(&duel(2_000.0)).unwrap();
    engine.attach_controller(Side::Blue, Box::new(GunneryAi::new(7)));
    engine.attach_controller(Side::Red, Box::new(GunneryAi::new(11)));

    let mut hulls: std::collections::BTreeMap<ShipId, f64> = std::collections::BTreeMap::new();
    for _ in 0..2_000 {
        let snap = engine.tick();
        for ship in &snap.ships {
            if let Some(prev) = hulls.get(&ship.id) {
                assert!(
                    ship.hull_integrity <= *prev,
                    "hull of {:?} increased",
                    ship.id
                );
            }
            hulls.insert(ship.id, ship.hull_integrity);
        }
        if snap.phase == MatchPhase::Finished {
            break;
        }
    }
}

// --------------------------------------------------------------- scheduler

#[test]
fn pause_freezes_world_and_drops_ship_commands() {
    let mut engine = MatchEngine::new(&duel(5_000.0)).unwrap();
    engine.queue_command(full_ahead(ShipId(0)));
    engine.tick();

    engine.queue_command(MatchCommand::Pause);
    let paused = engine.tick();
    assert_eq!(paused.phase, MatchPhase::Paused);
    let frozen_tick = paused.time.tick;
    let frozen_pos = paused.ship(ShipId(0)).unwrap().position;

    for _ in 0..5 {
        engine.queue_command(full_ahead(ShipId(0)));
        let snap = engine.tick();
        assert_eq!(snap.time.tick, frozen_tick);
        assert_eq!(snap.ship(ShipId(0)).unwrap().position.x, frozen_pos.x);
    }

    engine.queue_command(MatchCommand::Resume);
    let resumed = engine.tick();
    assert_eq!(resumed.phase, MatchPhase::Running);
    assert_eq!(resumed.time.tick, frozen_tick + 1);
    // Kinematic state survived the pause; the ship is underway again.
    assert!(resumed.ship(ShipId(0)).unwrap().position.x > frozen_pos.x);
}

#[test]
fn stop_finishes_after_completing_the_tick() {
    let mut engine = MatchEngine::new(&duel(5_000.0)).unwrap();
    engine.queue_command(full_ahead(ShipId(0)));
    engine.queue_command(MatchCommand::Stop);
    let snap = engine.tick();

    assert_eq!(snap.phase, MatchPhase::Finished);
    assert_eq!(snap.outcome.unwrap().winner, None);
    // The stopping tick still ran its systems.
    assert!(snap.ship(ShipId(0)).unwrap().speed > 0.0);
}

#[test]
fn tick_limit_ends_in_a_draw() {
    let mut scenario = duel(5_000.0);
    scenario.tick_limit = 5;
    let mut engine = MatchEngine::new(&scenario).unwrap();

    for _ in 0..4 {
        assert_eq!(engine.tick().phase, MatchPhase::Running);
    }
    let last = engine.tick();
    assert_eq!(last.phase, MatchPhase::Finished);
    let outcome = last.outcome.unwrap();
    assert_eq!(outcome.winner, None);
    assert_eq!(outcome.final_tick, 5);
}

#[test]
fn finished_match_ignores_further_ticks() {
    let mut scenario = duel(5_000.0);
    scenario.tick_limit = 1;
    let mut engine = MatchEngine::new(&scenario).unwrap();
    let first = engine.tick();
    assert_eq!(first.phase, MatchPhase::Finished);

    engine.queue_command(full_ahead(ShipId(0)));
    let after = engine.tick();
    assert_eq!(after.time.tick, first.time.tick);
    assert_eq!(after.ship(ShipId(0)).unwrap().speed, 0.0);
}

// --------------------------------------------------------------- controllers

struct FullAhead;

impl ShipController for FullAhead {
    fn command(
        &mut self,
        _snapshot: &TickSnapshot,
        _terrain: &TerrainMap,
        _ship: &ShipView,
    ) -> Option<ShipCommand> {
        Some(ShipCommand {
            helm: Some(HelmOrder {
                heading_delta: 0.0,
                speed_delta: f64::INFINITY,
            }),
            fire: None,
        })
    }
}

#[test]
fn controller_steers_uncommanded_ships() {
    let mut engine = MatchEngine::new(&duel(5_000.0)).unwrap();
    engine.attach_controller(Side::Blue, Box::new(FullAhead));

    let snap = engine.tick();
    assert!(snap.ship(ShipId(0)).unwrap().speed > 0.0);
    // No controller on Red; it stays put.
    assert_eq!(snap.ship(ShipId(1)).unwrap().speed, 0.0);
}

#[test]
fn external_command_overrides_controller() {
    let mut engine = MatchEngine::new(&duel(5_000.0)).unwrap();
    engine.attach_controller(Side::Blue, Box::new(FullAhead));

    engine.queue_command(ship_command(
        ShipId(0),
        Some(HelmOrder {
            heading_delta: 0.0,
            speed_delta: 0.0,
        }),
        None,
    ));
    let snap = engine.tick();
    assert_eq!(snap.ship(ShipId(0)).unwrap().speed, 0.0);
}

// ------------------------------------------------------------- determinism

#[test]
fn identical_seeds_replay_identically() {
    let build = || {
        let mut engine = MatchEngine::new(&duel(3_000.0)).unwrap();
        engine.attach_controller(Side::Blue, Box::new(GunneryAi::new(42)));
        engine.attach_controller(Side::Red, Box::new(GunneryAi::new(1337)));
        engine
    };
    let mut a = build();
    let mut b = build();

    for _ in 0..300 {
        let sa = serde_json::to_string(&a.tick()).unwrap();
        let sb = serde_json::to_string(&b.tick()).unwrap();
        assert_eq!(sa, sb);
    }
}

// ------------------------------------------------------------------ runner

#[test]
fn runner_drives_match_to_completion() {
    let mut scenario = duel(5_000.0);
    scenario.tick_limit = 10;
    let engine = MatchEngine::new(&scenario).unwrap();

    let handle = runner::spawn_match(engine);
    let outcome = handle.wait_outcome().unwrap();
    assert_eq!(outcome.winner, None);
    assert_eq!(outcome.final_tick, 10);

    let snap = handle.latest_snapshot().unwrap();
    assert_eq!(snap.phase, MatchPhase::Finished);
}

#[test]
fn runner_shutdown_stops_the_match() {
    let engine = MatchEngine::new(&duel(5_000.0)).unwrap();
    let handle = runner::spawn_match(engine);
    assert!(handle.send(MatchCommand::Stop));

    let outcome = handle.wait_outcome().unwrap();
    assert_eq!(outcome.winner, None);
}
