//! State reports: what `describe` produces for each entity.
//!
//! Reports are detached copies: they name other entities instead of holding
//! handles, so they stay valid after the simulation moves on.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{Point, SimTime};

/// Every entity's report, in registry (name) order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub time: SimTime,
    pub entities: Vec<EntityReport>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "entity")]
pub enum EntityReport {
    Ship(ShipReport),
    Island(IslandReport),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipReport {
    pub name: String,
    pub kind: ShipKind,
    pub position: Point,
    /// Degrees (0 = North, clockwise).
    pub course: f64,
    pub speed: f64,
    pub fuel: f64,
    pub fuel_capacity: f64,
    pub max_speed: f64,
    pub resistance: i32,
    pub state: MovementState,
    /// Present only while moving to a position.
    pub destination: Option<Point>,
    pub docked_at: Option<String>,
    pub combat: Option<CombatReport>,
    pub cargo: Option<CargoReport>,
    pub cruise: Option<CruiseReport>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatReport {
    pub state: AttackState,
    /// `None` once the target has been retired.
    pub target: Option<String>,
    pub firepower: i32,
    pub max_range: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CargoReport {
    pub state: CargoState,
    pub cargo: f64,
    pub capacity: f64,
    pub load_island: Option<String>,
    pub unload_island: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CruiseReport {
    pub state: CruiseState,
    pub first_island: Option<String>,
    pub target_island: Option<String>,
    /// Islands still to visit, alphabetical.
    pub remaining: Vec<String>,
    pub cruise_speed: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IslandReport {
    pub name: String,
    pub position: Point,
    pub fuel: f64,
    pub production_rate: f64,
}

impl EntityReport {
    pub fn name(&self) -> &str {
        match self {
            EntityReport::Ship(ship) => &ship.name,
            EntityReport::Island(island) => &island.name,
        }
    }
}

impl fmt::Display for EntityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityReport::Ship(ship) => write!(f, "{ship}"),
            EntityReport::Island(island) => write!(f, "{island}"),
        }
    }
}

impl fmt::Display for ShipReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} at {}", self.kind, self.name, self.position)?;
        match self.state {
            MovementState::Sunk => return write!(f, " sunk"),
            MovementState::Sinking => return write!(f, " sinking"),
            _ => writeln!(
                f,
                ", fuel: {:.2} tons, resistance: {}",
                self.fuel, self.resistance
            )?,
        }

        let docked_at = self.docked_at.as_deref().unwrap_or("?");
        match self.state {
            MovementState::MovingToPosition => write!(
                f,
                "Moving to {} on course {:.2} deg, speed {:.2} nm/hr",
                self.destination.unwrap_or_default(),
                self.course,
                self.speed
            )?,
            MovementState::MovingOnCourse => write!(
                f,
                "Moving on course {:.2} deg, speed {:.2} nm/hr",
                self.course, self.speed
            )?,
            MovementState::Docked => write!(f, "Docked at {docked_at}")?,
            MovementState::Stopped => write!(f, "Stopped")?,
            MovementState::DeadInTheWater => write!(f, "Dead in the water")?,
            MovementState::Sinking | MovementState::Sunk => {}
        }

        if let Some(combat) = &self.combat {
            if combat.state == AttackState::Attacking {
                let target = combat.target.as_deref().unwrap_or("nothing");
                write!(f, "\nAttacking {target}")?;
            }
        }

        if let Some(cargo) = &self.cargo {
            write!(f, "\nCargo: {:.2} tons", cargo.cargo)?;
            let activity = match cargo.state {
                CargoState::NoCargoDest => "no cargo destinations",
                CargoState::Loading => "loading",
                CargoState::Unloading => "unloading",
                CargoState::MovingToLoad => "moving to loading destination",
                CargoState::MovingToUnload => "moving to unloading destination",
            };
            write!(f, ", {activity}")?;
        }

        if let Some(cruise) = &self.cruise {
            match cruise.state {
                CruiseState::OffCruise => {}
                CruiseState::TravelingToIsland => {
                    let target = cruise.target_island.as_deref().unwrap_or("?");
                    write!(f, "\nOn cruise to {target}")?;
                }
                _ => write!(f, "\nWaiting during cruise at {docked_at}")?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for IslandReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Island {} at position {}\nFuel available: {:.2} tons",
            self.name, self.position, self.fuel
        )
    }
}
