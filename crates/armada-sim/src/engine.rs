//! Simulation engine, the orchestrator of the naval world.
//!
//! `Simulation` owns the hecs ECS world, the name registries, the clock and
//! the attached views. Every public call runs to completion, collecting
//! notifications in an outbox, and flushes them to the views before it
//! returns. Completely headless; the controller binary drives it.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use hecs::{Entity, World};
use tracing::{debug, info};

use armada_core::commands::Command;
use armada_core::components::Island;
use armada_core::enums::{Capability, ShipKind};
use armada_core::error::{Result, SimError};
use armada_core::events::{Notification, View};
use armada_core::state::{EntityReport, IslandReport, ShipReport, WorldSnapshot};
use armada_core::types::{Point, SimTime};

use crate::observer::{Observers, ViewId};
use crate::orders;
use crate::systems;
use crate::world_setup;

/// Which names collide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NamePolicy {
    /// One namespace for ships and islands.
    #[default]
    UniqueAcrossAll,
    /// Ships only collide with ships, islands with islands.
    UniquePerKind,
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimConfig {
    pub names: NamePolicy,
}

/// The simulation. Owns the ECS world and all sim state.
pub struct Simulation {
    world: World,
    time: SimTime,
    config: SimConfig,
    ships: BTreeMap<String, Entity>,
    islands: BTreeMap<String, Entity>,
    outbox: Vec<Notification>,
    observers: Observers,
    despawn_buffer: Vec<Entity>,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

impl Simulation {
    /// An empty simulation at tick 0.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            config,
            ships: BTreeMap::new(),
            islands: BTreeMap::new(),
            outbox: Vec::new(),
            observers: Observers::default(),
            despawn_buffer: Vec::new(),
        }
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    pub fn island_count(&self) -> usize {
        self.islands.len()
    }

    // --- Registry ---

    fn check_name(&self, name: &str, is_ship: bool) -> Result<()> {
        let clash = match (self.config.names, is_ship) {
            (NamePolicy::UniqueAcrossAll, _) => {
                self.ships.contains_key(name) || self.islands.contains_key(name)
            }
            (NamePolicy::UniquePerKind, true) => self.ships.contains_key(name),
            (NamePolicy::UniquePerKind, false) => self.islands.contains_key(name),
        };
        if clash {
            return Err(SimError::NameInUse {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    /// Whether a new ship could not take `name`.
    pub fn is_name_in_use(&self, name: &str) -> bool {
        self.check_name(name, true).is_err()
    }

    pub fn add_island(
        &mut self,
        name: &str,
        position: Point,
        fuel: f64,
        production_rate: f64,
    ) -> Result<Entity> {
        self.check_name(name, false)?;
        let island =
            world_setup::spawn_island(&mut self.world, name, position, fuel, production_rate);
        self.islands.insert(name.to_string(), island);
        info!(island = name, %position, fuel, production_rate, "island constructed");

        systems::notify::island_state(&self.world, island, &mut self.outbox);
        self.flush();
        Ok(island)
    }

    /// Build a ship from a type tag (`Cruiser`, `Tanker`, `Cruise_ship`).
    pub fn create_ship(&mut self, name: &str, type_tag: &str, position: Point) -> Result<Entity> {
        let kind: ShipKind = type_tag.parse()?;
        self.add_ship(name, kind, position)
    }

    pub fn add_ship(&mut self, name: &str, kind: ShipKind, position: Point) -> Result<Entity> {
        self.check_name(name, true)?;
        let ship = world_setup::spawn_ship(&mut self.world, name, kind, position);
        self.ships.insert(name.to_string(), ship);
        info!(ship = name, %kind, %position, "ship constructed");

        systems::notify::ship_state(&self.world, ship, &mut self.outbox);
        self.flush();
        Ok(ship)
    }

    /// Retire a ship immediately, announcing its removal.
    pub fn remove_ship(&mut self, name: &str) -> Result<()> {
        let ship = self.lookup_ship(name)?;
        self.world
            .despawn(ship)
            .map_err(|_| systems::query::stale(ship))?;
        self.ships.remove(name);
        info!(ship = name, "removed from the simulation");

        self.outbox.push(Notification::Removed {
            name: name.to_string(),
        });
        self.flush();
        Ok(())
    }

    pub fn lookup_ship(&self, name: &str) -> Result<Entity> {
        self.ships
            .get(name)
            .copied()
            .ok_or_else(|| SimError::NotFound {
                kind: "Ship",
                name: name.to_string(),
            })
    }

    pub fn lookup_island(&self, name: &str) -> Result<Entity> {
        self.islands
            .get(name)
            .copied()
            .ok_or_else(|| SimError::NotFound {
                kind: "Island",
                name: name.to_string(),
            })
    }

    pub fn is_ship_present(&self, name: &str) -> bool {
        self.ships.contains_key(name)
    }

    /// Capability set of the named ship.
    pub fn capabilities(&self, name: &str) -> Result<Vec<Capability>> {
        let ship = self.lookup_ship(name)?;
        Ok(systems::query::capabilities(&self.world, ship))
    }

    /// Every entity in name order. Islands come first on a shared name.
    fn registry_order(&self) -> Vec<Entity> {
        let mut order: Vec<(&String, u8, Entity)> = self
            .islands
            .iter()
            .map(|(name, &island)| (name, 0, island))
            .chain(self.ships.iter().map(|(name, &ship)| (name, 1, ship)))
            .collect();
        order.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
        order.into_iter().map(|(_, _, entity)| entity).collect()
    }

    // --- Ship orders ---

    pub fn set_course_and_speed(&mut self, ship: &str, course: f64, speed: f64) -> Result<()> {
        let entity = self.lookup_ship(ship)?;
        let result =
            orders::set_course_and_speed(&mut self.world, entity, course, speed, &mut self.outbox);
        self.flush();
        result
    }

    pub fn set_destination(&mut self, ship: &str, destination: Point, speed: f64) -> Result<()> {
        let entity = self.lookup_ship(ship)?;
        let result = orders::set_destination(
            &mut self.world,
            entity,
            destination,
            speed,
            &self.islands,
            &mut self.outbox,
        );
        self.flush();
        result
    }

    /// Sail to an island's position. For a cruise ship this starts a cruise.
    pub fn set_destination_island(&mut self, ship: &str, island: &str, speed: f64) -> Result<()> {
        let island = self.lookup_island(island)?;
        let destination = systems::query::location_of(&self.world, island)
            .ok_or_else(|| systems::query::stale(island))?;
        self.set_destination(ship, destination, speed)
    }

    pub fn dock(&mut self, ship: &str, island: &str) -> Result<()> {
        let entity = self.lookup_ship(ship)?;
        let island = self.lookup_island(island)?;
        let result = orders::dock(&mut self.world, entity, island, &mut self.outbox);
        self.flush();
        result
    }

    pub fn refuel(&mut self, ship: &str) -> Result<()> {
        let entity = self.lookup_ship(ship)?;
        let result = orders::refuel(&mut self.world, entity, &mut self.outbox);
        self.flush();
        result
    }

    pub fn stop(&mut self, ship: &str) -> Result<()> {
        let entity = self.lookup_ship(ship)?;
        let result = orders::stop(&mut self.world, entity, &mut self.outbox);
        self.flush();
        result
    }

    pub fn load_at(&mut self, ship: &str, island: &str) -> Result<()> {
        let entity = self.lookup_ship(ship)?;
        let island = self.lookup_island(island)?;
        let result = orders::load_at(&mut self.world, entity, island, &mut self.outbox);
        self.flush();
        result
    }

    pub fn unload_at(&mut self, ship: &str, island: &str) -> Result<()> {
        let entity = self.lookup_ship(ship)?;
        let island = self.lookup_island(island)?;
        let result = orders::unload_at(&mut self.world, entity, island, &mut self.outbox);
        self.flush();
        result
    }

    pub fn attack(&mut self, ship: &str, target: &str) -> Result<()> {
        let entity = self.lookup_ship(ship)?;
        let target = self.lookup_ship(target)?;
        orders::attack(&mut self.world, entity, target)
    }

    pub fn stop_attack(&mut self, ship: &str) -> Result<()> {
        let entity = self.lookup_ship(ship)?;
        orders::stop_attack(&mut self.world, entity)
    }

    /// Execute a single operator command.
    pub fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Course {
                ship,
                course,
                speed,
            } => self.set_course_and_speed(&ship, course, speed),
            Command::Position {
                ship,
                destination,
                speed,
            } => self.set_destination(&ship, destination, speed),
            Command::Destination {
                ship,
                island,
                speed,
            } => self.set_destination_island(&ship, &island, speed),
            Command::DockAt { ship, island } => self.dock(&ship, &island),
            Command::Refuel { ship } => self.refuel(&ship),
            Command::Stop { ship } => self.stop(&ship),
            Command::LoadAt { ship, island } => self.load_at(&ship, &island),
            Command::UnloadAt { ship, island } => self.unload_at(&ship, &island),
            Command::Attack { ship, target } => self.attack(&ship, &target),
            Command::StopAttack { ship } => self.stop_attack(&ship),
            Command::Go => {
                self.advance_time();
                Ok(())
            }
            Command::Create {
                name,
                kind,
                position,
            } => self.add_ship(&name, kind, position).map(|_| ()),
        }
    }

    // --- Time ---

    /// Advance the simulation by one tick.
    ///
    /// Every entity is updated exactly once in name order, then sunk ships
    /// are retired. No entity joins or leaves during the traversal.
    pub fn advance_time(&mut self) {
        self.time.advance();
        debug!(tick = self.time.tick, "advancing time");

        for entity in self.registry_order() {
            Self::update_entity(&mut self.world, entity, &mut self.outbox);
        }

        let removed =
            systems::cleanup::run(&mut self.world, &mut self.despawn_buffer, &mut self.outbox);
        for name in removed {
            self.ships.remove(&name);
        }

        self.flush();
    }

    /// Movement core first, then every capability the ship carries.
    fn update_entity(world: &mut World, entity: Entity, outbox: &mut Vec<Notification>) {
        if world.get::<&Island>(entity).is_ok() {
            systems::depot::update(world, entity);
            return;
        }

        systems::helm::update(world, entity, outbox);
        for capability in systems::query::capabilities(world, entity) {
            match capability {
                Capability::Combat => systems::gunnery::update(world, entity),
                Capability::Cargo => systems::cargo::update(world, entity, outbox),
                Capability::Cruise => systems::cruise::update(world, entity, outbox),
            }
        }
    }

    // --- Reports ---

    /// One report per entity, in name order.
    pub fn describe_all(&self) -> Vec<EntityReport> {
        self.registry_order()
            .into_iter()
            .filter_map(|entity| systems::report::describe(&self.world, entity))
            .collect()
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        systems::report::build_snapshot(&self.world, self.time, self.registry_order())
    }

    pub fn ship_report(&self, name: &str) -> Result<ShipReport> {
        let ship = self.lookup_ship(name)?;
        systems::report::ship_report(&self.world, ship).ok_or_else(|| systems::query::stale(ship))
    }

    pub fn island_report(&self, name: &str) -> Result<IslandReport> {
        let island = self.lookup_island(name)?;
        systems::report::island_report(&self.world, island)
            .ok_or_else(|| systems::query::stale(island))
    }

    // --- Views ---

    /// Attach a view and replay the current state of every entity to it.
    pub fn attach(&mut self, view: Rc<RefCell<dyn View>>) -> ViewId {
        let mut replay = Vec::new();
        for entity in self.registry_order() {
            systems::notify::entity_state(&self.world, entity, &mut replay);
        }
        Observers::send_to(&view, &replay);
        self.observers.attach(view)
    }

    /// Stop notifying a view. Returns false if it was not attached.
    pub fn detach(&mut self, id: ViewId) -> bool {
        self.observers.detach(id)
    }

    pub fn view_count(&self) -> usize {
        self.observers.len()
    }

    /// Deliver everything collected during the current call.
    fn flush(&mut self) {
        if self.outbox.is_empty() {
            return;
        }
        self.observers.publish(&self.outbox);
        self.outbox.clear();
    }
}
