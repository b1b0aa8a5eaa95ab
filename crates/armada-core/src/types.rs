//! Fundamental geometric and simulation types.

use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position in simulation space (nautical miles, Cartesian).
/// x = East, y = North.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Polar displacement from one point to another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CompassVector {
    /// Bearing in degrees (0 = North, clockwise).
    pub direction: f64,
    /// Range in nautical miles.
    pub distance: f64,
}

/// Simulation time tracking. One tick is one simulated hour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn as_vec(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn from_vec(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }

    /// Range to another point in nautical miles.
    pub fn distance_to(&self, other: &Point) -> f64 {
        self.as_vec().distance(other.as_vec())
    }

    /// Bearing to another point in degrees (0 = North, clockwise).
    pub fn bearing_to(&self, other: &Point) -> f64 {
        let d = other.as_vec() - self.as_vec();
        normalize_degrees(d.x.atan2(d.y).to_degrees())
    }

    /// The point reached by travelling `distance` along `course` (degrees).
    pub fn offset(&self, course: f64, distance: f64) -> Point {
        let (sin, cos) = course.to_radians().sin_cos();
        Point::from_vec(self.as_vec() + DVec2::new(sin, cos) * distance)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

impl CompassVector {
    pub fn between(from: &Point, to: &Point) -> Self {
        Self {
            direction: from.bearing_to(to),
            distance: from.distance_to(to),
        }
    }
}

impl SimTime {
    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
    }
}

/// Wrap an angle in degrees into [0, 360).
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
