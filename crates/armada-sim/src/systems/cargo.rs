//! Cargo system: the tanker's load/unload cycle.
//!
//! Once both a load and an unload island are set, the tanker shuttles
//! between them on its own: sail to the load island at full speed, dock,
//! fill its tank and hold, sail to the unload island, dock, deliver the
//! whole hold, and repeat. The cycle ends on `stop` or when the tanker can
//! no longer move.

use hecs::{Entity, World};
use tracing::{info, warn};

use armada_core::components::{CargoHold, Hull, Name};
use armada_core::constants::REFUEL_MIN;
use armada_core::enums::{CargoState, MovementState};
use armada_core::error::{Result, SimError};
use armada_core::events::Notification;

use super::{depot, helm, query};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Leg {
    Load,
    Unload,
}

impl Leg {
    fn operation(self) -> &'static str {
        match self {
            Leg::Load => "load at a destination",
            Leg::Unload => "unload at a destination",
        }
    }
}

/// Snapshot of the hold, copied out so other entities can be borrowed.
#[derive(Debug, Clone, Copy)]
struct HoldView {
    state: CargoState,
    cargo: f64,
    capacity: f64,
    load: Option<Entity>,
    unload: Option<Entity>,
}

fn hold_view(world: &World, ship: Entity) -> Option<HoldView> {
    let hold = world.get::<&CargoHold>(ship).ok()?;
    Some(HoldView {
        state: hold.state,
        cargo: hold.cargo,
        capacity: hold.capacity,
        load: hold.load,
        unload: hold.unload,
    })
}

fn set_state(world: &mut World, ship: Entity, state: CargoState) {
    if let Ok(mut hold) = world.get::<&mut CargoHold>(ship) {
        hold.state = state;
    }
}

/// Movement commands are refused while the tanker has any cargo destination.
pub fn guard(world: &World, ship: Entity) -> Result<()> {
    match hold_view(world, ship) {
        Some(hold) if hold.load.is_some() || hold.unload.is_some() => {
            Err(SimError::HasCargoDestinations)
        }
        _ => Ok(()),
    }
}

pub fn set_load_destination(
    world: &mut World,
    ship: Entity,
    island: Entity,
    outbox: &mut Vec<Notification>,
) -> Result<()> {
    set_destination(world, ship, island, Leg::Load, outbox)
}

pub fn set_unload_destination(
    world: &mut World,
    ship: Entity,
    island: Entity,
    outbox: &mut Vec<Notification>,
) -> Result<()> {
    set_destination(world, ship, island, Leg::Unload, outbox)
}

fn set_destination(
    world: &mut World,
    ship: Entity,
    island: Entity,
    leg: Leg,
    outbox: &mut Vec<Notification>,
) -> Result<()> {
    let Some(hold) = hold_view(world, ship) else {
        return Err(SimError::NotSupported {
            ship: query::name_of(world, ship).unwrap_or_default(),
            operation: leg.operation(),
        });
    };
    if hold.state != CargoState::NoCargoDest {
        return Err(SimError::HasCargoDestinations);
    }
    let (previous, other) = match leg {
        Leg::Load => (hold.load, hold.unload),
        Leg::Unload => (hold.unload, hold.load),
    };
    if other == Some(island) {
        return Err(SimError::CargoDestinationsIdentical);
    }

    assign(world, ship, leg, Some(island));
    if other.is_some() {
        if let Err(error) = start_cycle(world, ship, outbox) {
            assign(world, ship, leg, previous);
            return Err(error);
        }
    }
    info!(
        ship = %query::name_of(world, ship).unwrap_or_default(),
        island = %query::name_of(world, island).unwrap_or_default(),
        ?leg,
        "cargo destination set"
    );
    Ok(())
}

fn assign(world: &mut World, ship: Entity, leg: Leg, island: Option<Entity>) {
    if let Ok(mut hold) = world.get::<&mut CargoHold>(ship) {
        match leg {
            Leg::Load => hold.load = island,
            Leg::Unload => hold.unload = island,
        }
    }
}

/// Pick the first step of a fresh cycle from where the tanker is now.
fn start_cycle(world: &mut World, ship: Entity, outbox: &mut Vec<Notification>) -> Result<()> {
    let Some(HoldView {
        cargo,
        load: Some(load),
        unload: Some(unload),
        ..
    }) = hold_view(world, ship)
    else {
        return Ok(());
    };
    let (state, docked_at, max_speed) = {
        let hull = world.get::<&Hull>(ship).map_err(|_| query::stale(ship))?;
        (hull.state, hull.docked_at, hull.max_speed)
    };

    if state == MovementState::Docked {
        if docked_at == Some(load) {
            set_state(world, ship, CargoState::Loading);
            return Ok(());
        }
        if docked_at == Some(unload) {
            set_state(world, ship, CargoState::Unloading);
            return Ok(());
        }
    }

    if !state.is_moving() {
        if cargo == 0.0 && helm::can_dock(world, ship, load) {
            helm::dock(world, ship, load, outbox)?;
            set_state(world, ship, CargoState::Loading);
            return Ok(());
        }
        if cargo > 0.0 && helm::can_dock(world, ship, unload) {
            helm::dock(world, ship, unload, outbox)?;
            set_state(world, ship, CargoState::Unloading);
            return Ok(());
        }
    }

    if cargo == 0.0 {
        sail(world, ship, load, max_speed, outbox)?;
        set_state(world, ship, CargoState::MovingToLoad);
    } else {
        sail(world, ship, unload, max_speed, outbox)?;
        set_state(world, ship, CargoState::MovingToUnload);
    }
    Ok(())
}

fn sail(
    world: &mut World,
    ship: Entity,
    island: Entity,
    speed: f64,
    outbox: &mut Vec<Notification>,
) -> Result<()> {
    let destination = query::location_of(world, island).ok_or_else(|| query::stale(island))?;
    helm::set_destination(world, ship, destination, speed, outbox)
}

/// Forget both destinations and drop back to `NoCargoDest`.
pub fn end_cycle(world: &mut World, ship: Entity) {
    if let Ok((name, hold)) = world.query_one_mut::<(&Name, &mut CargoHold)>(ship) {
        let active = hold.load.is_some() || hold.unload.is_some();
        hold.load = None;
        hold.unload = None;
        hold.state = CargoState::NoCargoDest;
        if active {
            info!(ship = %name.0, "now has no cargo destinations");
        }
    }
}

/// One tick of the cargo cycle, after the movement core.
pub fn update(world: &mut World, ship: Entity, outbox: &mut Vec<Notification>) {
    let Some(hold) = hold_view(world, ship) else {
        return;
    };
    if !query::can_move(world, ship) {
        if hold.state != CargoState::NoCargoDest || hold.load.is_some() || hold.unload.is_some() {
            end_cycle(world, ship);
        }
        return;
    }
    let (Some(load), Some(unload)) = (hold.load, hold.unload) else {
        return;
    };

    match hold.state {
        CargoState::NoCargoDest => {}
        CargoState::MovingToLoad => {
            if !query::is_moving(world, ship) {
                arrive(world, ship, load, CargoState::Loading, outbox);
            }
        }
        CargoState::MovingToUnload => {
            if !query::is_moving(world, ship) {
                arrive(world, ship, unload, CargoState::Unloading, outbox);
            }
        }
        CargoState::Loading => {
            let needed = hold.capacity - hold.cargo;
            if let Err(error) = helm::refuel(world, ship, outbox) {
                warn!(%error, "refuel during loading failed");
            }
            if needed < REFUEL_MIN {
                if let Ok(mut hold) = world.get::<&mut CargoHold>(ship) {
                    hold.cargo = hold.capacity;
                }
                depart(world, ship, unload, CargoState::MovingToUnload, outbox);
            } else {
                let loaded = depot::provide_fuel(world, load, needed);
                if let Ok((name, hold)) = world.query_one_mut::<(&Name, &mut CargoHold)>(ship) {
                    hold.cargo = (hold.cargo + loaded).min(hold.capacity);
                    info!(ship = %name.0, cargo = hold.cargo, "now has cargo");
                }
            }
        }
        CargoState::Unloading => {
            if hold.cargo == 0.0 {
                depart(world, ship, load, CargoState::MovingToLoad, outbox);
            } else {
                depot::accept_fuel(world, unload, hold.cargo);
                if let Ok((name, hold)) = world.query_one_mut::<(&Name, &mut CargoHold)>(ship) {
                    hold.cargo = 0.0;
                    info!(ship = %name.0, "unloaded cargo");
                }
            }
        }
    }
}

fn arrive(
    world: &mut World,
    ship: Entity,
    island: Entity,
    next: CargoState,
    outbox: &mut Vec<Notification>,
) {
    match helm::dock(world, ship, island, outbox) {
        Ok(()) => set_state(world, ship, next),
        Err(error) => {
            warn!(%error, "tanker could not dock, abandoning cargo cycle");
            end_cycle(world, ship);
        }
    }
}

fn depart(
    world: &mut World,
    ship: Entity,
    island: Entity,
    next: CargoState,
    outbox: &mut Vec<Notification>,
) {
    let max_speed = match world.get::<&Hull>(ship) {
        Ok(hull) => hull.max_speed,
        Err(_) => return,
    };
    match sail(world, ship, island, max_speed, outbox) {
        Ok(()) => set_state(world, ship, next),
        Err(error) => {
            warn!(%error, "tanker could not sail, abandoning cargo cycle");
            end_cycle(world, ship);
        }
    }
}
