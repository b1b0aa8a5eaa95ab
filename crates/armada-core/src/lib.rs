//! Core types and definitions for the armada naval simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry and the track integrator, components, commands, notifications,
//! state reports, errors, and constants. It has no dependency on the engine
//! or on any front end.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod track;
pub mod types;

pub use error::{Result, SimError};
