//! Error taxonomy for engine commands.
//!
//! Every variant is locally recoverable: a failed command leaves the
//! simulation untouched and the caller decides what to report.

use thiserror::Error;

/// Convenient result alias for engine operations.
pub type Result<T> = std::result::Result<T, SimError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Ship is sinking, sunk, or dead in the water.
    #[error("Ship cannot move!")]
    CannotMove,

    /// Negative or NaN.
    #[error("Invalid speed: {requested}")]
    InvalidSpeed { requested: f64 },

    #[error("Ship cannot go that fast! (requested {requested}, maximum {maximum})")]
    SpeedExceeded { requested: f64, maximum: f64 },

    /// Not stopped, or outside the docking radius.
    #[error("Can't dock!")]
    CannotDock,

    #[error("Must be docked!")]
    MustBeDocked,

    #[error("Tanker has cargo destinations!")]
    HasCargoDestinations,

    #[error("Load and unload cargo destinations are the same!")]
    CargoDestinationsIdentical,

    #[error("Was not attacking!")]
    NotAttacking,

    #[error("Already attacking this target!")]
    AlreadyAttackingTarget,

    #[error("Warship may not attack itself!")]
    SelfAttack,

    #[error("Cannot attack!")]
    CannotAttack,

    /// The ship's capability set does not include this operation.
    #[error("{ship} cannot {operation}!")]
    NotSupported {
        ship: String,
        operation: &'static str,
    },

    #[error("{kind} not found: {name}")]
    NotFound { kind: &'static str, name: String },

    #[error("Name is already in use: {name}")]
    NameInUse { name: String },

    #[error("Trying to create ship of unknown type: {tag}")]
    UnknownShipType { tag: String },
}
