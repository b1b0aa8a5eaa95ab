//! Simulation constants and tuning parameters.

/// Duration of one tick in hours. Speeds are nautical miles per tick.
pub const TICK_HOURS: f64 = 1.0;

// --- Docking and fuel transfer ---

/// Maximum distance at which a stopped ship may dock (nautical miles).
pub const DOCKING_RADIUS: f64 = 0.1;

/// Shortfalls below this many tons count as a full tank or hold.
pub const REFUEL_MIN: f64 = 0.005;

// --- Naming ---

/// Shortest name accepted for a new ship.
pub const MIN_NAME_LENGTH: usize = 2;

/// Courses are entered in [0, MAX_COURSE_DEGREES).
pub const MAX_COURSE_DEGREES: f64 = 360.0;

// --- Cruiser ---

pub const CRUISER_FUEL_CAPACITY: f64 = 1000.0;
pub const CRUISER_MAX_SPEED: f64 = 20.0;
pub const CRUISER_FUEL_CONSUMPTION: f64 = 10.0;
pub const CRUISER_RESISTANCE: i32 = 6;
pub const CRUISER_FIREPOWER: i32 = 3;
pub const CRUISER_MAX_RANGE: f64 = 15.0;

// --- Tanker ---

pub const TANKER_FUEL_CAPACITY: f64 = 100.0;
pub const TANKER_MAX_SPEED: f64 = 10.0;
pub const TANKER_FUEL_CONSUMPTION: f64 = 2.0;
pub const TANKER_RESISTANCE: i32 = 0;
pub const TANKER_CARGO_CAPACITY: f64 = 1000.0;

// --- Cruise ship ---

pub const CRUISE_SHIP_FUEL_CAPACITY: f64 = 500.0;
pub const CRUISE_SHIP_MAX_SPEED: f64 = 15.0;
pub const CRUISE_SHIP_FUEL_CONSUMPTION: f64 = 2.0;
pub const CRUISE_SHIP_RESISTANCE: i32 = 0;
