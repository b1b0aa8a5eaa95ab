//! Sailing data board: a view that tabulates fuel, course and speed.

use std::collections::BTreeMap;
use std::fmt;

use armada_core::events::View;

const FIELD_WIDTH: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SailingData {
    pub fuel: f64,
    pub course: f64,
    pub speed: f64,
}

/// Latest sailing data per ship, listed alphabetically.
#[derive(Debug, Clone, Default)]
pub struct SailingBoard {
    ships: BTreeMap<String, SailingData>,
}

impl SailingBoard {
    pub fn get(&self, name: &str) -> Option<SailingData> {
        self.ships.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    pub fn clear(&mut self) {
        self.ships.clear();
    }
}

impl View for SailingBoard {
    fn on_course_speed(&mut self, name: &str, course: f64, speed: f64) {
        let entry = self.ships.entry(name.to_string()).or_default();
        entry.course = course;
        entry.speed = speed;
    }

    fn on_fuel(&mut self, name: &str, fuel: f64) {
        self.ships.entry(name.to_string()).or_default().fuel = fuel;
    }

    fn on_removed(&mut self, name: &str) {
        self.ships.remove(name);
    }
}

impl fmt::Display for SailingBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----- Sailing Data -----")?;
        writeln!(
            f,
            "{:>w$}{:>w$}{:>w$}{:>w$}",
            "Ship",
            "Fuel",
            "Course",
            "Speed",
            w = FIELD_WIDTH
        )?;
        for (name, data) in &self.ships {
            writeln!(
                f,
                "{:>w$}{:>w$.2}{:>w$.2}{:>w$.2}",
                name,
                data.fuel,
                data.course,
                data.speed,
                w = FIELD_WIDTH
            )?;
        }
        Ok(())
    }
}
