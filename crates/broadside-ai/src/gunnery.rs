//! Gunnery AI — a simple combat controller.
//!
//! Pure functions compute the tactical decision from view data; the
//! `GunneryAi` struct only carries the seeded RNG used for patrol
//! headings, keeping decisions reproducible for a given seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use broadside_core::class::WeaponSpec;
use broadside_core::commands::{FireOrder, FireTarget, HelmOrder, ShipCommand};
use broadside_core::state::{ShipView, TickSnapshot};
use broadside_core::types::wrap_angle;
use broadside_terrain::{has_line_of_sight, TerrainMap};

/// Hull fraction below which the AI breaks off and runs.
const WITHDRAW_HULL_FRACTION: f64 = 0.25;

/// Fraction of the shortest gun's range the AI tries to close to before
/// holding distance.
const PREFERRED_RANGE_FRACTION: f64 = 0.6;

/// Tactical posture derived from the current situation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Posture {
    /// No enemy in sight; hold course, occasionally pick a new leg.
    Patrol,
    /// Close with the target and bring guns to bear.
    Engage,
    /// Crippled; turn away from the nearest enemy at full speed.
    Withdraw,
}

/// Everything the decision functions need about one ship's situation.
pub struct GunneryContext<'a> {
    pub ship: &'a ShipView,
    pub nearest_enemy: Option<&'a ShipView>,
    /// Clear line of sight to the nearest enemy.
    pub los_clear: bool,
}

impl<'a> GunneryContext<'a> {
    /// Build the context from a snapshot: nearest enemy by range, ties
    /// broken by lowest id for determinism.
    pub fn from_snapshot(
        snapshot: &'a TickSnapshot,
        terrain: &TerrainMap,
        ship: &'a ShipView,
    ) -> Self {
        let nearest_enemy = snapshot
            .ships
            .iter()
            .filter(|other| other.side != ship.side)
            .min_by(|a, b| {
                let ra = ship.position.range_to(&a.position);
                let rb = ship.position.range_to(&b.position);
                ra.partial_cmp(&rb)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then(a.id.cmp(&b.id))
            });

        let los_clear = nearest_enemy
            .is_some_and(|enemy| has_line_of_sight(terrain, &ship.position, &enemy.position));

        Self {
            ship,
            nearest_enemy,
            los_clear,
        }
    }
}

/// Decide the posture for this tick.
pub fn evaluate_posture(ctx: &GunneryContext) -> Posture {
    if ctx.nearest_enemy.is_none() {
        return Posture::Patrol;
    }
    if ctx.ship.hull_integrity < ctx.ship.hull_max * WITHDRAW_HULL_FRACTION {
        return Posture::Withdraw;
    }
    Posture::Engage
}

/// Helm order for the Engage posture: turn toward the enemy, run at full
/// speed until inside preferred gun range, then slow to hold position.
pub fn engage_helm(ctx: &GunneryContext, loadout: &[WeaponSpec]) -> HelmOrder {
    let enemy = match ctx.nearest_enemy {
        Some(e) => e,
        None => return HelmOrder::default(),
    };

    let bearing = ctx.ship.position.bearing_to(&enemy.position);
    let heading_delta = wrap_angle(bearing - ctx.ship.heading);

    let range = ctx.ship.position.range_to(&enemy.position);
    let preferred = shortest_gun_range(loadout) * PREFERRED_RANGE_FRACTION;
    let speed_delta = if range > preferred {
        f64::INFINITY // engine clamps to class accel and max speed
    } else {
        -ctx.ship.speed
    };

    HelmOrder {
        heading_delta,
        speed_delta,
    }
}

/// Helm order for the Withdraw posture: directly away, flank speed.
pub fn withdraw_helm(ctx: &GunneryContext) -> HelmOrder {
    let enemy = match ctx.nearest_enemy {
        Some(e) => e,
        None => return HelmOrder::default(),
    };

    let away = ctx.ship.position.bearing_to(&enemy.position) + std::f64::consts::PI;
    HelmOrder {
        heading_delta: wrap_angle(away - ctx.ship.heading),
        speed_delta: f64::INFINITY,
    }
}

/// Pick a fire order: the lowest ready slot whose gun reaches the target,
/// only when line of sight is clear.
pub fn select_fire_order(ctx: &GunneryContext, loadout: &[WeaponSpec]) -> Option<FireOrder> {
    let enemy = ctx.nearest_enemy?;
    if !ctx.los_clear {
        return None;
    }

    let range = ctx.ship.position.range_to(&enemy.position);
    for (slot, spec) in loadout.iter().enumerate() {
        let ready = ctx.ship.cooldowns.get(slot).copied().unwrap_or(u32::MAX) == 0;
        if ready && range <= spec.range {
            return Some(FireOrder {
                slot,
                target: FireTarget::Ship(enemy.id),
            });
        }
    }
    None
}

fn shortest_gun_range(loadout: &[WeaponSpec]) -> f64 {
    loadout
        .iter()
        .map(|w| w.range)
        .fold(f64::INFINITY, f64::min)
}

/// The stock gunnery controller. One instance drives every ship of a
/// side; patrol legs are the only nondeterministic-looking choice and
/// come from the seeded RNG.
pub struct GunneryAi {
    rng: ChaCha8Rng,
}

impl GunneryAi {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl super::ShipController for GunneryAi {
    fn command(
        &mut self,
        snapshot: &TickSnapshot,
        terrain: &TerrainMap,
        ship: &ShipView,
    ) -> Option<ShipCommand> {
        let ctx = GunneryContext::from_snapshot(snapshot, terrain, ship);
        let loadout = ship.class.spec().loadout;

        match evaluate_posture(&ctx) {
            Posture::Patrol => {
                // Pick a new leg roughly every 10 seconds of drift.
                if self.rng.gen_bool(1.0 / 300.0) {
                    let heading_delta: f64 =
                        self.rng.gen_range(-std::f64::consts::PI..std::f64::consts::PI);
                    Some(ShipCommand {
                        helm: Some(HelmOrder {
                            heading_delta,
                            speed_delta: f64::INFINITY,
                        }),
                        fire: None,
                    })
                } else {
                    None
                }
            }
            Posture::Engage => Some(ShipCommand {
                helm: Some(engage_helm(&ctx, loadout)),
                fire: select_fire_order(&ctx, loadout),
            }),
            Posture::Withdraw => Some(ShipCommand {
                helm: Some(withdraw_helm(&ctx)),
                fire: None,
            }),
        }
    }
}
