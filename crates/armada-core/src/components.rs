//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.
//!
//! A ship is `Name + Hull + Track` plus any capability components
//! (`Weapons`, `CargoHold`, `Itinerary`). An island is
//! `Name + Island + Point + FuelDepot`. Cross-entity references are
//! `hecs::Entity` handles, which go stale once the referent is despawned.

use std::collections::BTreeMap;

use hecs::Entity;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Point;

/// Unique, immutable entity name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Name(pub String);

/// Movement core carried by every ship.
#[derive(Debug, Clone)]
pub struct Hull {
    pub kind: ShipKind,
    /// Tons on board, always within [0, fuel_capacity].
    pub fuel: f64,
    pub fuel_capacity: f64,
    /// Tons burned per nautical mile.
    pub fuel_consumption: f64,
    /// Nautical miles per tick.
    pub max_speed: f64,
    /// Remaining damage budget. Below zero the ship sinks.
    pub resistance: i32,
    pub state: MovementState,
    /// Meaningful only while `MovingToPosition`.
    pub destination: Point,
    /// Island currently docked at; set iff `state == Docked`.
    pub docked_at: Option<Entity>,
}

/// Marks an entity as an island.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Island;

/// Island fuel reservoir.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FuelDepot {
    /// Tons on hand.
    pub fuel: f64,
    /// Tons added per tick.
    pub production_rate: f64,
}

/// Combat capability.
#[derive(Debug, Clone)]
pub struct Weapons {
    /// Resistance removed from the target per shot.
    pub firepower: i32,
    /// Targets strictly closer than this are in range (nautical miles).
    pub max_range: f64,
    pub state: AttackState,
    pub target: Option<Entity>,
}

/// Marks a warship that returns fire on whoever hits it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Retaliation;

/// Cargo-cycle capability.
#[derive(Debug, Clone)]
pub struct CargoHold {
    /// Tons of cargo fuel, always within [0, capacity].
    pub cargo: f64,
    pub capacity: f64,
    pub state: CargoState,
    pub load: Option<Entity>,
    pub unload: Option<Entity>,
}

/// Scripted-tour capability.
#[derive(Debug, Clone, Default)]
pub struct Itinerary {
    pub state: CruiseState,
    /// Islands not yet visited this cruise, keyed (and therefore ordered) by name.
    pub remaining: BTreeMap<String, Entity>,
    /// Where the cruise started and must end.
    pub first: Option<Entity>,
    /// Island currently sailing to or docked at.
    pub target: Option<Entity>,
    pub cruise_speed: f64,
}
