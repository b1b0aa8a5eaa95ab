//! Operator commands sent from a controller to the simulation.
//!
//! Commands are executed synchronously; each one either succeeds or
//! returns a `SimError` and leaves the simulation unchanged.

use serde::{Deserialize, Serialize};

use crate::enums::ShipKind;
use crate::types::Point;

/// All possible operator actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    // --- Helm ---
    /// Steam on a course (degrees) at a speed.
    Course { ship: String, course: f64, speed: f64 },
    /// Sail to a position at a speed.
    Position {
        ship: String,
        destination: Point,
        speed: f64,
    },
    /// Sail to an island's position at a speed.
    Destination {
        ship: String,
        island: String,
        speed: f64,
    },
    /// Dock at an island.
    DockAt { ship: String, island: String },
    /// Refuel from the island the ship is docked at.
    Refuel { ship: String },
    /// Stop the ship (also cancels cargo cycles and cruises).
    Stop { ship: String },

    // --- Cargo ---
    LoadAt { ship: String, island: String },
    UnloadAt { ship: String, island: String },

    // --- Combat ---
    Attack { ship: String, target: String },
    StopAttack { ship: String },

    // --- Simulation control ---
    /// Advance simulated time by one tick.
    Go,
    /// Build a new ship through the factory.
    Create {
        name: String,
        kind: ShipKind,
        position: Point,
    },
}
