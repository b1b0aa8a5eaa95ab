//! Notifications pushed from the simulation to attached views.

use serde::{Deserialize, Serialize};

use crate::types::Point;

/// One externally observable state change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Notification {
    ShipLocation { name: String, position: Point },
    IslandLocation { name: String, position: Point },
    CourseSpeed { name: String, course: f64, speed: f64 },
    Fuel { name: String, fuel: f64 },
    /// The entity has left the simulation.
    Removed { name: String },
}

/// Push-only consumer of notifications. The engine never queries a view.
///
/// Every method defaults to doing nothing, so a view only implements the
/// updates it cares about.
pub trait View {
    fn on_ship_location(&mut self, _name: &str, _position: Point) {}
    fn on_island_location(&mut self, _name: &str, _position: Point) {}
    fn on_course_speed(&mut self, _name: &str, _course: f64, _speed: f64) {}
    fn on_fuel(&mut self, _name: &str, _fuel: f64) {}
    fn on_removed(&mut self, _name: &str) {}
}

impl Notification {
    /// Name of the entity this notification is about.
    pub fn subject(&self) -> &str {
        match self {
            Notification::ShipLocation { name, .. }
            | Notification::IslandLocation { name, .. }
            | Notification::CourseSpeed { name, .. }
            | Notification::Fuel { name, .. }
            | Notification::Removed { name } => name,
        }
    }

    /// Dispatch to the matching `View` method.
    pub fn deliver(&self, view: &mut dyn View) {
        match self {
            Notification::ShipLocation { name, position } => view.on_ship_location(name, *position),
            Notification::IslandLocation { name, position } => {
                view.on_island_location(name, *position)
            }
            Notification::CourseSpeed {
                name,
                course,
                speed,
            } => view.on_course_speed(name, *course, *speed),
            Notification::Fuel { name, fuel } => view.on_fuel(name, *fuel),
            Notification::Removed { name } => view.on_removed(name),
        }
    }
}
