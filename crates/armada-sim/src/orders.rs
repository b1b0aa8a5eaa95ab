//! Capability-aware ship orders.
//!
//! Each order runs the movement-core behavior from `systems::helm` and then
//! layers on whatever the ship's capabilities add: tankers refuse helm
//! orders while cycling, cruise ships start or cancel itineraries, and
//! capability-only orders are refused with `NotSupported` by ships without
//! that capability.

use std::collections::BTreeMap;

use hecs::{Entity, World};

use armada_core::enums::Capability;
use armada_core::error::{Result, SimError};
use armada_core::events::Notification;
use armada_core::types::Point;

use crate::systems::query::{has_capability, name_of};
use crate::systems::{cargo, cruise, gunnery, helm};

fn require(
    world: &World,
    ship: Entity,
    capability: Capability,
    operation: &'static str,
) -> Result<()> {
    if has_capability(world, ship, capability) {
        Ok(())
    } else {
        Err(SimError::NotSupported {
            ship: name_of(world, ship).unwrap_or_default(),
            operation,
        })
    }
}

pub fn set_course_and_speed(
    world: &mut World,
    ship: Entity,
    course: f64,
    speed: f64,
    outbox: &mut Vec<Notification>,
) -> Result<()> {
    cargo::guard(world, ship)?;
    helm::set_course_and_speed(world, ship, course, speed, outbox)?;
    cruise::cancel(world, ship);
    Ok(())
}

pub fn set_destination(
    world: &mut World,
    ship: Entity,
    destination: Point,
    speed: f64,
    islands: &BTreeMap<String, Entity>,
    outbox: &mut Vec<Notification>,
) -> Result<()> {
    cargo::guard(world, ship)?;
    helm::set_destination(world, ship, destination, speed, outbox)?;
    cruise::after_destination(world, ship, destination, speed, islands);
    Ok(())
}

pub fn stop(world: &mut World, ship: Entity, outbox: &mut Vec<Notification>) -> Result<()> {
    helm::stop(world, ship, outbox)?;
    cargo::end_cycle(world, ship);
    cruise::cancel(world, ship);
    Ok(())
}

pub fn dock(
    world: &mut World,
    ship: Entity,
    island: Entity,
    outbox: &mut Vec<Notification>,
) -> Result<()> {
    helm::dock(world, ship, island, outbox)
}

pub fn refuel(world: &mut World, ship: Entity, outbox: &mut Vec<Notification>) -> Result<()> {
    helm::refuel(world, ship, outbox)
}

pub fn load_at(
    world: &mut World,
    ship: Entity,
    island: Entity,
    outbox: &mut Vec<Notification>,
) -> Result<()> {
    require(world, ship, Capability::Cargo, "load at a destination")?;
    cargo::set_load_destination(world, ship, island, outbox)
}

pub fn unload_at(
    world: &mut World,
    ship: Entity,
    island: Entity,
    outbox: &mut Vec<Notification>,
) -> Result<()> {
    require(world, ship, Capability::Cargo, "unload at a destination")?;
    cargo::set_unload_destination(world, ship, island, outbox)
}

pub fn attack(world: &mut World, ship: Entity, target: Entity) -> Result<()> {
    require(world, ship, Capability::Combat, "attack")?;
    gunnery::attack(world, ship, target)
}

pub fn stop_attack(world: &mut World, ship: Entity) -> Result<()> {
    require(world, ship, Capability::Combat, "stop attacking")?;
    gunnery::stop_attack(world, ship)
}
