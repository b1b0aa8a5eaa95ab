//! Scenario definitions: the islands and ships a simulation starts with.
//!
//! Scenarios are plain serde data, so they can be hardcoded (the default
//! fleet) or read from a JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use armada_core::enums::ShipKind;
use armada_core::error::SimError;
use armada_core::types::Point;

use crate::engine::{SimConfig, Simulation};

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid scenario: {0}")]
    Json(#[from] serde_json::Error),
    #[error("scenario could not be built: {0}")]
    Build(#[from] SimError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IslandSpec {
    pub name: String,
    pub position: Point,
    #[serde(default)]
    pub fuel: f64,
    #[serde(default)]
    pub production_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipSpec {
    pub name: String,
    pub kind: ShipKind,
    pub position: Point,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub islands: Vec<IslandSpec>,
    #[serde(default)]
    pub ships: Vec<ShipSpec>,
}

impl Scenario {
    /// Four islands, two cruisers and a tanker.
    pub fn default_fleet() -> Self {
        let island = |name: &str, x: f64, y: f64, fuel: f64, production_rate: f64| IslandSpec {
            name: name.to_string(),
            position: Point::new(x, y),
            fuel,
            production_rate,
        };
        let ship = |name: &str, kind: ShipKind, x: f64, y: f64| ShipSpec {
            name: name.to_string(),
            kind,
            position: Point::new(x, y),
        };

        Self {
            islands: vec![
                island("Exxon", 10.0, 10.0, 1000.0, 200.0),
                island("Shell", 0.0, 30.0, 1000.0, 200.0),
                island("Bermuda", 20.0, 20.0, 0.0, 0.0),
                island("Treasure_Island", 50.0, 5.0, 100.0, 5.0),
            ],
            ships: vec![
                ship("Ajax", ShipKind::Cruiser, 15.0, 15.0),
                ship("Xerxes", ShipKind::Cruiser, 25.0, 25.0),
                ship("Valdez", ShipKind::Tanker, 30.0, 30.0),
            ],
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Build a simulation seeded with this scenario. Islands are added
    /// before ships.
    pub fn build(&self, config: SimConfig) -> Result<Simulation, ScenarioError> {
        let mut sim = Simulation::new(config);
        for island in &self.islands {
            sim.add_island(
                &island.name,
                island.position,
                island.fuel,
                island.production_rate,
            )?;
        }
        for ship in &self.ships {
            sim.add_ship(&ship.name, ship.kind, ship.position)?;
        }
        Ok(sim)
    }
}
