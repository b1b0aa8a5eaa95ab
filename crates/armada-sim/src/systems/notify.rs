//! Builds the notifications that describe an entity's full current state.
//!
//! Used after every movement step, when a ship or island joins the
//! simulation, and to replay the world to a newly attached view.

use hecs::{Entity, World};

use armada_core::components::{FuelDepot, Hull, Name};
use armada_core::events::Notification;
use armada_core::track::Track;
use armada_core::types::Point;

/// Location, course/speed and fuel of a ship.
pub fn ship_state(world: &World, ship: Entity, outbox: &mut Vec<Notification>) {
    let Ok(mut query) = world.query_one::<(&Name, &Hull, &Track)>(ship) else {
        return;
    };
    let Some((name, hull, track)) = query.get() else {
        return;
    };
    outbox.push(Notification::ShipLocation {
        name: name.0.clone(),
        position: track.position(),
    });
    outbox.push(Notification::CourseSpeed {
        name: name.0.clone(),
        course: track.course(),
        speed: track.speed(),
    });
    outbox.push(Notification::Fuel {
        name: name.0.clone(),
        fuel: hull.fuel,
    });
}

pub fn island_state(world: &World, island: Entity, outbox: &mut Vec<Notification>) {
    let Ok(mut query) = world.query_one::<(&Name, &Point, &FuelDepot)>(island) else {
        return;
    };
    if let Some((name, position, _depot)) = query.get() {
        outbox.push(Notification::IslandLocation {
            name: name.0.clone(),
            position: *position,
        });
    }
}

/// Whichever of the above applies.
pub fn entity_state(world: &World, entity: Entity, outbox: &mut Vec<Notification>) {
    if world.get::<&Hull>(entity).is_ok() {
        ship_state(world, entity, outbox);
    } else {
        island_state(world, entity, outbox);
    }
}
