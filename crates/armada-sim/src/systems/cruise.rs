//! Cruise system: the cruise ship's island-hopping itinerary.
//!
//! Sending a cruise ship to a point that is exactly an island's position
//! starts a cruise. At each island it docks, refuels, spends a tick
//! sightseeing, then heads for the nearest island it has not visited.
//! When none remain it returns to the first island and the cruise ends
//! on arrival there.

use std::collections::BTreeMap;

use hecs::{Entity, World};
use tracing::{info, warn};

use armada_core::components::{Itinerary, Name};
use armada_core::enums::CruiseState;
use armada_core::events::Notification;
use armada_core::types::Point;

use super::{helm, query};

/// Hook run after a successful destination command. Any cruise in progress
/// is cancelled; a destination on an island begins a new one.
pub fn after_destination(
    world: &mut World,
    ship: Entity,
    destination: Point,
    speed: f64,
    islands: &BTreeMap<String, Entity>,
) {
    if world.get::<&Itinerary>(ship).is_err() {
        return;
    }
    cancel(world, ship);

    let first = islands
        .values()
        .copied()
        .find(|&island| query::location_of(world, island) == Some(destination));
    let Some(first) = first else {
        return;
    };

    if let Ok((name, itinerary)) = world.query_one_mut::<(&Name, &mut Itinerary)>(ship) {
        itinerary.remaining = islands.clone();
        itinerary.first = Some(first);
        itinerary.target = Some(first);
        itinerary.cruise_speed = speed;
        itinerary.state = CruiseState::TravelingToIsland;
        info!(ship = %name.0, speed, "cruise will start");
    }
}

/// Abandon the cruise in progress, if any.
pub fn cancel(world: &mut World, ship: Entity) {
    let Ok((name, itinerary)) = world.query_one_mut::<(&Name, &mut Itinerary)>(ship) else {
        return;
    };
    if itinerary.state != CruiseState::OffCruise {
        info!(ship = %name.0, "canceling current cruise");
    }
    end(itinerary);
}

fn end(itinerary: &mut Itinerary) {
    itinerary.state = CruiseState::OffCruise;
    itinerary.remaining.clear();
    itinerary.first = None;
    itinerary.target = None;
}

fn set_state(world: &mut World, ship: Entity, state: CruiseState) {
    if let Ok(mut itinerary) = world.get::<&mut Itinerary>(ship) {
        itinerary.state = state;
    }
}

/// One tick of the itinerary, after the movement core.
pub fn update(world: &mut World, ship: Entity, outbox: &mut Vec<Notification>) {
    let (state, first, target) = match world.get::<&Itinerary>(ship) {
        Ok(itinerary) => (itinerary.state, itinerary.first, itinerary.target),
        Err(_) => return,
    };
    if state == CruiseState::OffCruise {
        return;
    }
    if !query::is_afloat(world, ship) {
        cancel(world, ship);
        return;
    }
    let Some(target) = target else {
        cancel(world, ship);
        return;
    };

    match state {
        CruiseState::OffCruise => {}
        CruiseState::TravelingToIsland => {
            if !helm::can_dock(world, ship, target) {
                return;
            }
            if let Err(error) = helm::dock(world, ship, target, outbox) {
                warn!(%error, "cruise ship could not dock, ending cruise");
                cancel(world, ship);
                return;
            }
            let finished = world
                .get::<&Itinerary>(ship)
                .map(|itinerary| Some(target) == first && itinerary.remaining.is_empty())
                .unwrap_or(true);
            if finished {
                if let Ok((name, itinerary)) = world.query_one_mut::<(&Name, &mut Itinerary)>(ship)
                {
                    end(itinerary);
                    info!(ship = %name.0, "cruise is over");
                }
            } else {
                set_state(world, ship, CruiseState::Refueling);
            }
        }
        CruiseState::Refueling => {
            if let Err(error) = helm::refuel(world, ship, outbox) {
                warn!(%error, "cruise ship could not refuel");
            }
            let island_name = query::name_of(world, target).unwrap_or_default();
            if let Ok(mut itinerary) = world.get::<&mut Itinerary>(ship) {
                itinerary.remaining.remove(&island_name);
                itinerary.state = CruiseState::Sightseeing;
            }
        }
        CruiseState::Sightseeing => set_state(world, ship, CruiseState::ReadyToDepart),
        CruiseState::ReadyToDepart => depart(world, ship, first, outbox),
    }
}

/// Head for the nearest unvisited island, or back to the first one.
fn depart(world: &mut World, ship: Entity, first: Option<Entity>, outbox: &mut Vec<Notification>) {
    let (remaining, cruise_speed) = match world.get::<&Itinerary>(ship) {
        Ok(itinerary) => (
            itinerary.remaining.values().copied().collect::<Vec<_>>(),
            itinerary.cruise_speed,
        ),
        Err(_) => return,
    };
    let Some(here) = query::location_of(world, ship) else {
        return;
    };

    let mut nearest: Option<(f64, Entity)> = None;
    for island in remaining {
        let Some(position) = query::location_of(world, island) else {
            continue;
        };
        let distance = here.distance_to(&position);
        if nearest.map_or(true, |(best, _)| distance < best) {
            nearest = Some((distance, island));
        }
    }
    let Some(next) = nearest.map(|(_, island)| island).or(first) else {
        cancel(world, ship);
        return;
    };
    let Some(destination) = query::location_of(world, next) else {
        cancel(world, ship);
        return;
    };

    if let Err(error) = helm::set_destination(world, ship, destination, cruise_speed, outbox) {
        warn!(%error, "cruise ship could not depart, ending cruise");
        cancel(world, ship);
        return;
    }
    let island_name = query::name_of(world, next).unwrap_or_default();
    if let Ok((name, itinerary)) = world.query_one_mut::<(&Name, &mut Itinerary)>(ship) {
        itinerary.target = Some(next);
        itinerary.state = CruiseState::TravelingToIsland;
        info!(ship = %name.0, island = %island_name, "will visit");
    }
}
