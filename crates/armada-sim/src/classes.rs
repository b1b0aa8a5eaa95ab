//! Ship class profiles.
//!
//! Consolidates the per-class parameters the factory stamps onto a new ship.

use armada_core::enums::ShipKind;

/// Gun parameters for a warship class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Armament {
    /// Resistance removed from the target per shot.
    pub firepower: i32,
    /// Targets strictly closer than this are in range (nm).
    pub max_range: f64,
}

/// Everything the factory needs to build a ship of one class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipClass {
    /// Tank size (tons). New ships start full.
    pub fuel_capacity: f64,
    /// Nautical miles per tick.
    pub max_speed: f64,
    /// Tons per nautical mile.
    pub fuel_consumption: f64,
    pub resistance: i32,
    pub armament: Option<Armament>,
    /// Whether the class returns fire when hit.
    pub retaliates: bool,
    /// Cargo hold size (tons), None for ships without a hold.
    pub cargo_capacity: Option<f64>,
    /// Whether the class can run island itineraries.
    pub cruises: bool,
}

/// Get the class profile for a ship kind.
pub fn get_class(kind: ShipKind) -> ShipClass {
    use armada_core::constants::*;

    match kind {
        ShipKind::Cruiser => ShipClass {
            fuel_capacity: CRUISER_FUEL_CAPACITY,
            max_speed: CRUISER_MAX_SPEED,
            fuel_consumption: CRUISER_FUEL_CONSUMPTION,
            resistance: CRUISER_RESISTANCE,
            armament: Some(Armament {
                firepower: CRUISER_FIREPOWER,
                max_range: CRUISER_MAX_RANGE,
            }),
            retaliates: true,
            cargo_capacity: None,
            cruises: false,
        },
        ShipKind::Tanker => ShipClass {
            fuel_capacity: TANKER_FUEL_CAPACITY,
            max_speed: TANKER_MAX_SPEED,
            fuel_consumption: TANKER_FUEL_CONSUMPTION,
            resistance: TANKER_RESISTANCE,
            armament: None,
            retaliates: false,
            cargo_capacity: Some(TANKER_CARGO_CAPACITY),
            cruises: false,
        },
        ShipKind::CruiseShip => ShipClass {
            fuel_capacity: CRUISE_SHIP_FUEL_CAPACITY,
            max_speed: CRUISE_SHIP_MAX_SPEED,
            fuel_consumption: CRUISE_SHIP_FUEL_CONSUMPTION,
            resistance: CRUISE_SHIP_RESISTANCE,
            armament: None,
            retaliates: false,
            cargo_capacity: None,
            cruises: true,
        },
    }
}
