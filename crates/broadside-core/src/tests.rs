//! Tests for core types, class tables, and scenario validation.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::class::GUN_127MM;
use crate::enums::{ShipClass, Side};
use crate::errors::SimError;
use crate::scenario::{ScenarioDescriptor, ShipPlacement, TerrainCell};
use crate::types::{wrap_angle, Position, Velocity};

#[test]
fn test_bearing_cardinal_directions() {
    let origin = Position::new(0.0, 0.0);

    let north = origin.bearing_to(&Position::new(0.0, 100.0));
    assert!(north.abs() < 1e-12, "bearing to north should be 0, got {north}");

    let east = origin.bearing_to(&Position::new(100.0, 0.0));
    assert!(
        (east - FRAC_PI_2).abs() < 1e-12,
        "bearing to east should be PI/2, got {east}"
    );

    let south = origin.bearing_to(&Position::new(0.0, -100.0));
    assert!((south - PI).abs() < 1e-12, "bearing to south should be PI");
}

#[test]
fn test_velocity_heading_round_trip() {
    let v = Velocity::from_heading(FRAC_PI_2, 10.0);
    assert!((v.x - 10.0).abs() < 1e-12, "east heading gives +x velocity");
    assert!(v.y.abs() < 1e-12);
    assert!((v.heading() - FRAC_PI_2).abs() < 1e-12);
    assert!((v.speed() - 10.0).abs() < 1e-12);
}

#[test]
fn test_wrap_angle() {
    assert!((wrap_angle(3.0 * PI) - PI).abs() < 1e-12);
    assert!((wrap_angle(-FRAC_PI_2) + FRAC_PI_2).abs() < 1e-12);
    assert!(wrap_angle(0.0).abs() < 1e-12);
}

#[test]
fn test_class_table_sanity() {
    for class in [ShipClass::Destroyer, ShipClass::Cruiser, ShipClass::Battleship] {
        let spec = class.spec();
        assert!(spec.max_speed > 0.0);
        assert!(spec.turn_rate > 0.0);
        assert!(spec.max_hull > 0.0);
        assert!(!spec.loadout.is_empty(), "{class:?} must carry weapons");
    }

    // Heavier classes are slower, tougher, and better armored.
    let dd = ShipClass::Destroyer.spec();
    let bb = ShipClass::Battleship.spec();
    assert!(dd.max_speed > bb.max_speed);
    assert!(dd.max_hull < bb.max_hull);
    assert!(dd.armor < bb.armor);
}

#[test]
fn test_weapon_derived_ticks() {
    assert!(GUN_127MM.lifetime_ticks() > 0);
    assert_eq!(GUN_127MM.cooldown_ticks(), 60, "2s at 30Hz is 60 ticks");
}

fn duel_roster() -> Vec<ShipPlacement> {
    vec![
        ShipPlacement {
            class: ShipClass::Destroyer,
            side: Side::Blue,
            position: Position::new(100.0, 100.0),
            heading: 0.0,
        },
        ShipPlacement {
            class: ShipClass::Destroyer,
            side: Side::Red,
            position: Position::new(100.0, 200.0),
            heading: PI,
        },
    ]
}

#[test]
fn test_scenario_valid() {
    let scenario = ScenarioDescriptor::open_water(1000.0, 1000.0, duel_roster());
    assert!(scenario.validate().is_ok());
}

#[test]
fn test_scenario_invalid_bounds() {
    let scenario = ScenarioDescriptor::open_water(0.0, 1000.0, duel_roster());
    assert!(matches!(
        scenario.validate(),
        Err(SimError::ScenarioInvalid(_))
    ));
}

#[test]
fn test_scenario_missing_side() {
    let mut roster = duel_roster();
    roster.retain(|s| s.side == Side::Blue);
    let scenario = ScenarioDescriptor::open_water(1000.0, 1000.0, roster);
    let err = scenario.validate().unwrap_err();
    assert!(err.to_string().contains("Red"), "unexpected error: {err}");
}

#[test]
fn test_scenario_ship_out_of_bounds() {
    let mut roster = duel_roster();
    roster[0].position = Position::new(-5.0, 100.0);
    let scenario = ScenarioDescriptor::open_water(1000.0, 1000.0, roster);
    assert!(scenario.validate().is_err());
}

#[test]
fn test_scenario_terrain_cell_outside_grid() {
    let mut scenario = ScenarioDescriptor::open_water(1000.0, 1000.0, duel_roster());
    scenario.terrain.push(TerrainCell {
        col: 50,
        row: 0,
        passable: false,
        blocks_los: true,
    });
    assert!(scenario.validate().is_err());
}
