//! Entity spawn factories for setting up the simulation world.
//!
//! Builds ships and islands with the component bundle their class calls
//! for. Name uniqueness is the engine's concern, not the factory's.

use hecs::{Entity, EntityBuilder, World};

use armada_core::components::*;
use armada_core::enums::{AttackState, CargoState, MovementState, ShipKind};
use armada_core::track::Track;
use armada_core::types::Point;

use crate::classes::get_class;

/// Spawn an island with a fuel depot.
pub fn spawn_island(
    world: &mut World,
    name: &str,
    position: Point,
    fuel: f64,
    production_rate: f64,
) -> Entity {
    world.spawn((
        Name(name.to_string()),
        Island,
        position,
        FuelDepot {
            fuel,
            production_rate,
        },
    ))
}

/// Spawn a ship of `kind`: stopped, full tank, capability components
/// according to its class.
pub fn spawn_ship(world: &mut World, name: &str, kind: ShipKind, position: Point) -> Entity {
    let class = get_class(kind);

    let mut builder = EntityBuilder::new();
    builder
        .add(Name(name.to_string()))
        .add(Hull {
            kind,
            fuel: class.fuel_capacity,
            fuel_capacity: class.fuel_capacity,
            fuel_consumption: class.fuel_consumption,
            max_speed: class.max_speed,
            resistance: class.resistance,
            state: MovementState::Stopped,
            destination: position,
            docked_at: None,
        })
        .add(Track::new(position));

    if let Some(armament) = class.armament {
        builder.add(Weapons {
            firepower: armament.firepower,
            max_range: armament.max_range,
            state: AttackState::NotAttacking,
            target: None,
        });
    }
    if class.retaliates {
        builder.add(Retaliation);
    }
    if let Some(capacity) = class.cargo_capacity {
        builder.add(CargoHold {
            cargo: 0.0,
            capacity,
            state: CargoState::NoCargoDest,
            load: None,
            unload: None,
        });
    }
    if class.cruises {
        builder.add(Itinerary::default());
    }

    world.spawn(builder.build())
}
