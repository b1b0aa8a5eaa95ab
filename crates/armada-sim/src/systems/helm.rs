//! Helm system: the movement core every ship carries.
//!
//! Base commands (course, destination, stop, dock, refuel), damage intake,
//! and the per-tick fuel-limited movement integrator. Capability systems
//! build on these; they never touch `Hull` or `Track` directly except
//! through the functions here.

use hecs::{Entity, World};
use tracing::{debug, info};

use armada_core::components::{FuelDepot, Hull, Island, Name};
use armada_core::constants::{DOCKING_RADIUS, REFUEL_MIN, TICK_HOURS};
use armada_core::enums::MovementState;
use armada_core::error::{Result, SimError};
use armada_core::events::Notification;
use armada_core::track::Track;
use armada_core::types::{CompassVector, Point};

use super::{depot, notify, query};

fn check_speed(hull: &Hull, speed: f64) -> Result<()> {
    if !hull.state.can_move() {
        return Err(SimError::CannotMove);
    }
    if speed.is_nan() || speed < 0.0 {
        return Err(SimError::InvalidSpeed { requested: speed });
    }
    if speed > hull.max_speed {
        return Err(SimError::SpeedExceeded {
            requested: speed,
            maximum: hull.max_speed,
        });
    }
    Ok(())
}

/// Steam toward `destination` at `speed`.
pub fn set_destination(
    world: &mut World,
    ship: Entity,
    destination: Point,
    speed: f64,
    outbox: &mut Vec<Notification>,
) -> Result<()> {
    let (name, hull, track) = world
        .query_one_mut::<(&Name, &mut Hull, &mut Track)>(ship)
        .map_err(|_| query::stale(ship))?;
    check_speed(hull, speed)?;

    let heading = CompassVector::between(&track.position(), &destination);
    hull.destination = destination;
    hull.state = MovementState::MovingToPosition;
    hull.docked_at = None;
    track.set_course(heading.direction);
    track.set_speed(speed);

    info!(
        ship = %name.0,
        course = track.course(),
        speed,
        %destination,
        distance = heading.distance,
        "will sail to position"
    );
    outbox.push(Notification::CourseSpeed {
        name: name.0.clone(),
        course: track.course(),
        speed,
    });
    Ok(())
}

/// Steam on a fixed course at `speed` until told otherwise.
pub fn set_course_and_speed(
    world: &mut World,
    ship: Entity,
    course: f64,
    speed: f64,
    outbox: &mut Vec<Notification>,
) -> Result<()> {
    let (name, hull, track) = world
        .query_one_mut::<(&Name, &mut Hull, &mut Track)>(ship)
        .map_err(|_| query::stale(ship))?;
    check_speed(hull, speed)?;

    hull.state = MovementState::MovingOnCourse;
    hull.docked_at = None;
    track.set_course(course);
    track.set_speed(speed);

    info!(ship = %name.0, course = track.course(), speed, "will sail on course");
    outbox.push(Notification::CourseSpeed {
        name: name.0.clone(),
        course: track.course(),
        speed,
    });
    Ok(())
}

pub fn stop(world: &mut World, ship: Entity, outbox: &mut Vec<Notification>) -> Result<()> {
    let (name, hull, track) = world
        .query_one_mut::<(&Name, &mut Hull, &mut Track)>(ship)
        .map_err(|_| query::stale(ship))?;
    if !hull.state.can_move() {
        return Err(SimError::CannotMove);
    }

    hull.state = MovementState::Stopped;
    hull.docked_at = None;
    track.set_speed(0.0);

    info!(ship = %name.0, "stopping");
    outbox.push(Notification::CourseSpeed {
        name: name.0.clone(),
        course: track.course(),
        speed: 0.0,
    });
    Ok(())
}

/// Stopped and within `DOCKING_RADIUS` of `island`.
pub fn can_dock(world: &World, ship: Entity, island: Entity) -> bool {
    let Some(berth) = island_position(world, island) else {
        return false;
    };
    let Ok(mut query) = world.query_one::<(&Hull, &Track)>(ship) else {
        return false;
    };
    match query.get() {
        Some((hull, track)) => {
            hull.state == MovementState::Stopped
                && track.position().distance_to(&berth) <= DOCKING_RADIUS
        }
        None => false,
    }
}

/// Dock at `island`, snapping onto its position.
pub fn dock(
    world: &mut World,
    ship: Entity,
    island: Entity,
    outbox: &mut Vec<Notification>,
) -> Result<()> {
    if !can_dock(world, ship, island) {
        return Err(SimError::CannotDock);
    }
    let berth = island_position(world, island).ok_or_else(|| query::stale(island))?;
    let island_name = query::name_of(world, island).unwrap_or_default();

    let (name, hull, track) = world
        .query_one_mut::<(&Name, &mut Hull, &mut Track)>(ship)
        .map_err(|_| query::stale(ship))?;
    track.set_position(berth);
    hull.state = MovementState::Docked;
    hull.docked_at = Some(island);

    info!(ship = %name.0, island = %island_name, "docked");
    outbox.push(Notification::ShipLocation {
        name: name.0.clone(),
        position: berth,
    });
    Ok(())
}

/// Top up the tank from the island the ship is docked at.
pub fn refuel(world: &mut World, ship: Entity, outbox: &mut Vec<Notification>) -> Result<()> {
    let (state, docked_at, fuel, capacity) = {
        let hull = world.get::<&Hull>(ship).map_err(|_| query::stale(ship))?;
        (hull.state, hull.docked_at, hull.fuel, hull.fuel_capacity)
    };
    let island = match (state, docked_at) {
        (MovementState::Docked, Some(island)) => island,
        _ => return Err(SimError::MustBeDocked),
    };

    let needed = capacity - fuel;
    if needed < REFUEL_MIN {
        // Top off the residue silently.
        let mut hull = world.get::<&mut Hull>(ship).map_err(|_| query::stale(ship))?;
        hull.fuel = hull.fuel_capacity;
        return Ok(());
    }
    let supplied = depot::provide_fuel(world, island, needed);

    let (name, hull) = world
        .query_one_mut::<(&Name, &mut Hull)>(ship)
        .map_err(|_| query::stale(ship))?;
    hull.fuel = (hull.fuel + supplied).min(hull.fuel_capacity);

    info!(ship = %name.0, supplied, fuel = hull.fuel, "refueled");
    outbox.push(Notification::Fuel {
        name: name.0.clone(),
        fuel: hull.fuel,
    });
    Ok(())
}

/// Take `amount` of damage. A ship pushed below zero resistance starts
/// sinking. Returns whether the ship is still afloat afterwards.
pub fn receive_hit(world: &mut World, ship: Entity, amount: i32) -> bool {
    let Ok((name, hull)) = world.query_one_mut::<(&Name, &mut Hull)>(ship) else {
        return false;
    };
    if !hull.state.is_afloat() {
        return false;
    }
    hull.resistance -= amount;
    info!(ship = %name.0, amount, resistance = hull.resistance, "hit");
    if hull.resistance < 0 {
        hull.state = MovementState::Sinking;
        hull.docked_at = None;
        info!(ship = %name.0, "sinking");
        return false;
    }
    true
}

/// One tick of the movement core.
///
/// Moving ships advance as far as their fuel allows; a sinking ship settles
/// into `Sunk` and is retired by the cleanup sweep.
pub fn update(world: &mut World, ship: Entity, outbox: &mut Vec<Notification>) {
    let Ok((name, hull, track)) = world.query_one_mut::<(&Name, &mut Hull, &mut Track)>(ship)
    else {
        return;
    };

    match hull.state {
        MovementState::MovingToPosition | MovementState::MovingOnCourse => {
            calculate_movement(&name.0, hull, track);
            notify::ship_state(world, ship, outbox);
        }
        MovementState::Sinking => {
            hull.state = MovementState::Sunk;
            hull.docked_at = None;
            track.set_speed(0.0);
            info!(ship = %name.0, "sunk");
        }
        state => debug!(ship = %name.0, ?state, "holding position"),
    }
}

/// Fuel-limited advance for one tick.
///
/// A ship that can reach its destination this tick snaps onto it and burns
/// fuel only for the distance covered. A ship that cannot afford the full
/// tick moves as far as its fuel takes it and goes dead in the water.
fn calculate_movement(name: &str, hull: &mut Hull, track: &mut Track) {
    let full_distance = track.speed() * TICK_HOURS;
    let full_fuel_required = full_distance * hull.fuel_consumption;

    let (time_possible, distance_possible) = if full_fuel_required <= hull.fuel {
        (TICK_HOURS, full_distance)
    } else {
        let distance = hull.fuel / hull.fuel_consumption;
        (distance / track.speed(), distance)
    };

    if hull.state == MovementState::MovingToPosition {
        let remaining = track.position().distance_to(&hull.destination);
        if remaining <= distance_possible {
            track.set_position(hull.destination);
            hull.fuel = (hull.fuel - remaining * hull.fuel_consumption).max(0.0);
            hull.state = MovementState::Stopped;
            track.set_speed(0.0);
            info!(ship = %name, position = %hull.destination, "arrived");
            return;
        }
    }

    track.advance(time_possible / TICK_HOURS);
    if full_fuel_required >= hull.fuel {
        hull.fuel = 0.0;
        hull.state = MovementState::DeadInTheWater;
        track.set_speed(0.0);
        info!(ship = %name, position = %track.position(), "now dead in the water");
    } else {
        hull.fuel -= full_fuel_required;
    }
}

fn island_position(world: &World, island: Entity) -> Option<Point> {
    let mut query = world.query_one::<(&Point, &Island, &FuelDepot)>(island).ok()?;
    query.get().map(|(position, _, _)| *position)
}
