//! Enumeration types used throughout the simulation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Concrete ship variant, selected by the factory from a type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipKind {
    /// Warship that fires on a target and returns fire when hit.
    Cruiser,
    /// Bulk fuel carrier shuttling between two islands.
    Tanker,
    /// Tours every island once and returns to where it started.
    #[serde(rename = "Cruise_ship")]
    CruiseShip,
}

/// Ship movement state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementState {
    Docked,
    #[default]
    Stopped,
    MovingToPosition,
    MovingOnCourse,
    /// Out of fuel; cannot be commanded to move again.
    DeadInTheWater,
    /// Resistance exhausted; becomes `Sunk` on the ship's next update.
    Sinking,
    /// Terminal. Retired from the registry at the end of the tick.
    Sunk,
}

/// Warship engagement state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackState {
    #[default]
    NotAttacking,
    Attacking,
}

/// Tanker cargo cycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CargoState {
    #[default]
    NoCargoDest,
    MovingToLoad,
    Loading,
    MovingToUnload,
    Unloading,
}

/// Cruise ship itinerary state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CruiseState {
    #[default]
    OffCruise,
    TravelingToIsland,
    Refueling,
    Sightseeing,
    ReadyToDepart,
}

/// Optional behavior a ship may carry on top of the movement core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Capability {
    Combat,
    Cargo,
    Cruise,
}

impl ShipKind {
    /// Type tag understood by the factory.
    pub fn tag(self) -> &'static str {
        match self {
            ShipKind::Cruiser => "Cruiser",
            ShipKind::Tanker => "Tanker",
            ShipKind::CruiseShip => "Cruise_ship",
        }
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ShipKind {
    type Err = SimError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "Cruiser" => Ok(ShipKind::Cruiser),
            "Tanker" => Ok(ShipKind::Tanker),
            "Cruise_ship" => Ok(ShipKind::CruiseShip),
            _ => Err(SimError::UnknownShipType {
                tag: tag.to_string(),
            }),
        }
    }
}

impl MovementState {
    /// Not sinking and not sunk.
    pub fn is_afloat(self) -> bool {
        !matches!(self, MovementState::Sinking | MovementState::Sunk)
    }

    /// Afloat and not dead in the water.
    pub fn can_move(self) -> bool {
        self.is_afloat() && self != MovementState::DeadInTheWater
    }

    pub fn is_moving(self) -> bool {
        matches!(
            self,
            MovementState::MovingToPosition | MovementState::MovingOnCourse
        )
    }
}
