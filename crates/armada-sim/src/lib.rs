//! Simulation engine for armada.
//!
//! Owns the hecs ECS world, advances every ship and island once per tick,
//! retires sunk ships, and fans state changes out to attached views.

pub mod classes;
pub mod engine;
pub mod observer;
pub mod orders;
pub mod scenario;
pub mod systems;
pub mod world_setup;

pub use armada_core as core;
pub use engine::{NamePolicy, SimConfig, Simulation};
pub use observer::{RecordingView, ViewId};
pub use scenario::{Scenario, ScenarioError};
