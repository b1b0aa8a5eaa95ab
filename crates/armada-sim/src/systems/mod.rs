//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only
//! work) plus the notification outbox. They do not own state; all state
//! lives in components. One module per capability, so a ship's update is
//! the movement core followed by whichever capability systems apply.

pub mod cargo;
pub mod cleanup;
pub mod cruise;
pub mod depot;
pub mod gunnery;
pub mod helm;
pub mod notify;
pub mod query;
pub mod report;
