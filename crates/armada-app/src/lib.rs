//! Armada command-line controller.
//!
//! This crate turns operator text into engine calls and keeps a sailing
//! data board up to date as an attached view. The `armada` binary wires it
//! to stdin/stdout.

pub mod controller;
pub mod parser;
pub mod sailing;

pub use armada_core as core;

#[cfg(test)]
mod tests;
