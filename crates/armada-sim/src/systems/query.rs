//! Read-only lookups shared by the systems.
//!
//! Handles may be stale; every helper degrades to `None`/`false` instead of
//! failing when the entity is gone.

use hecs::{Entity, World};

use armada_core::components::{CargoHold, Hull, Itinerary, Name, Weapons};
use armada_core::enums::Capability;
use armada_core::error::SimError;
use armada_core::track::Track;
use armada_core::types::Point;

pub fn name_of(world: &World, entity: Entity) -> Option<String> {
    world.get::<&Name>(entity).ok().map(|name| name.0.clone())
}

/// Ship position from its track, or island position.
pub fn location_of(world: &World, entity: Entity) -> Option<Point> {
    world
        .get::<&Track>(entity)
        .map(|track| track.position())
        .or_else(|_| world.get::<&Point>(entity).map(|point| *point))
        .ok()
}

/// False for islands, stale handles, and sinking or sunk ships.
pub fn is_afloat(world: &World, entity: Entity) -> bool {
    world
        .get::<&Hull>(entity)
        .map(|hull| hull.state.is_afloat())
        .unwrap_or(false)
}

pub fn can_move(world: &World, entity: Entity) -> bool {
    world
        .get::<&Hull>(entity)
        .map(|hull| hull.state.can_move())
        .unwrap_or(false)
}

pub fn is_moving(world: &World, entity: Entity) -> bool {
    world
        .get::<&Hull>(entity)
        .map(|hull| hull.state.is_moving())
        .unwrap_or(false)
}

/// Capability set of a ship, in `Capability` order.
pub fn capabilities(world: &World, entity: Entity) -> Vec<Capability> {
    [Capability::Combat, Capability::Cargo, Capability::Cruise]
        .into_iter()
        .filter(|capability| has_capability(world, entity, *capability))
        .collect()
}

pub fn has_capability(world: &World, entity: Entity, capability: Capability) -> bool {
    match capability {
        Capability::Combat => world.get::<&Weapons>(entity).is_ok(),
        Capability::Cargo => world.get::<&CargoHold>(entity).is_ok(),
        Capability::Cruise => world.get::<&Itinerary>(entity).is_ok(),
    }
}

/// Error for a handle whose entity has been despawned.
pub fn stale(entity: Entity) -> SimError {
    SimError::NotFound {
        kind: "Entity",
        name: format!("{entity:?}"),
    }
}
