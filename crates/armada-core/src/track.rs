//! Dead-reckoning track shared by every ship.
//!
//! A `Track` holds a position, a course and a speed. `advance` moves the
//! position along the course for a fraction of one tick; callers validate
//! speed and course before handing them over.

use serde::{Deserialize, Serialize};

use crate::types::{normalize_degrees, Point};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Track {
    position: Point,
    /// Degrees in [0, 360), 0 = North, clockwise.
    course: f64,
    /// Nautical miles per tick.
    speed: f64,
}

impl Track {
    /// A stationary track at `position`, heading North.
    pub fn new(position: Point) -> Self {
        Self {
            position,
            course: 0.0,
            speed: 0.0,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn course(&self) -> f64 {
        self.course
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn set_course(&mut self, course: f64) {
        self.course = normalize_degrees(course);
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    /// Move `speed * dt` along the current course, `dt` in ticks.
    pub fn advance(&mut self, dt: f64) {
        self.position = self.position.offset(self.course, self.speed * dt);
    }
}
