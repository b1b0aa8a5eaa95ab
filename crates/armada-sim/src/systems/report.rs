//! Report builder: reads the ECS world and produces detached reports.
//!
//! This is a read-only system. Handles held by components are resolved to
//! names here, so a stale handle simply shows up as `None`.

use hecs::{Entity, World};

use armada_core::components::{CargoHold, FuelDepot, Hull, Island, Itinerary, Name, Weapons};
use armada_core::enums::{AttackState, MovementState};
use armada_core::state::{
    CargoReport, CombatReport, CruiseReport, EntityReport, IslandReport, ShipReport,
    WorldSnapshot,
};
use armada_core::track::Track;
use armada_core::types::{Point, SimTime};

use super::query::name_of;

/// Build a snapshot of `order`, skipping handles that no longer resolve.
pub fn build_snapshot(
    world: &World,
    time: SimTime,
    order: impl IntoIterator<Item = Entity>,
) -> WorldSnapshot {
    WorldSnapshot {
        time,
        entities: order
            .into_iter()
            .filter_map(|entity| describe(world, entity))
            .collect(),
    }
}

pub fn describe(world: &World, entity: Entity) -> Option<EntityReport> {
    if world.get::<&Island>(entity).is_ok() {
        island_report(world, entity).map(EntityReport::Island)
    } else {
        ship_report(world, entity).map(EntityReport::Ship)
    }
}

pub fn ship_report(world: &World, ship: Entity) -> Option<ShipReport> {
    let mut query = world.query_one::<(&Name, &Hull, &Track)>(ship).ok()?;
    let (name, hull, track) = query.get()?;

    Some(ShipReport {
        name: name.0.clone(),
        kind: hull.kind,
        position: track.position(),
        course: track.course(),
        speed: track.speed(),
        fuel: hull.fuel,
        fuel_capacity: hull.fuel_capacity,
        max_speed: hull.max_speed,
        resistance: hull.resistance,
        state: hull.state,
        destination: (hull.state == MovementState::MovingToPosition).then_some(hull.destination),
        docked_at: hull.docked_at.and_then(|island| name_of(world, island)),
        combat: world.get::<&Weapons>(ship).ok().map(|weapons| CombatReport {
            state: weapons.state,
            target: match weapons.state {
                AttackState::Attacking => weapons.target.and_then(|target| name_of(world, target)),
                AttackState::NotAttacking => None,
            },
            firepower: weapons.firepower,
            max_range: weapons.max_range,
        }),
        cargo: world.get::<&CargoHold>(ship).ok().map(|hold| CargoReport {
            state: hold.state,
            cargo: hold.cargo,
            capacity: hold.capacity,
            load_island: hold.load.and_then(|island| name_of(world, island)),
            unload_island: hold.unload.and_then(|island| name_of(world, island)),
        }),
        cruise: world
            .get::<&Itinerary>(ship)
            .ok()
            .map(|itinerary| CruiseReport {
                state: itinerary.state,
                first_island: itinerary.first.and_then(|island| name_of(world, island)),
                target_island: itinerary.target.and_then(|island| name_of(world, island)),
                remaining: itinerary.remaining.keys().cloned().collect(),
                cruise_speed: itinerary.cruise_speed,
            }),
    })
}

pub fn island_report(world: &World, island: Entity) -> Option<IslandReport> {
    let mut query = world
        .query_one::<(&Name, &Point, &FuelDepot)>(island)
        .ok()?;
    let (name, position, depot) = query.get()?;
    Some(IslandReport {
        name: name.0.clone(),
        position: *position,
        fuel: depot.fuel,
        production_rate: depot.production_rate,
    })
}
