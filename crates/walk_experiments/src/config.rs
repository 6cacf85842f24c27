//! Experiment configuration: a JSON object mapping simulation names to entries.
//!
//! ```json
//! {
//!   "drunk": {
//!     "type": "grid",
//!     "times_to_run": 100,
//!     "number_of_steps": 1000,
//!     "walker": { "n_dim": 2, "obstacles": [[0, 1]], "restart_chance": 0.01 },
//!     "axis": [0, 1],
//!     "radius": 10.0
//!   }
//! }
//! ```
//!
//! Deserialisation only checks shapes and JSON types (unknown keys, negative
//! or fractional counts and integer vectors are rejected here). Value ranges
//! are validated by [`walk_core`] when the walkers and simulations are built.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;
use walk_core::{Position, Simulation, Walker, WalkerConfig, WalkerKind};

use crate::error::{ExperimentError, ExperimentResult};

/// Step rule named by the `type` field of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WalkerType {
    Regular,
    Step,
    Grid,
    Biased,
    Searcher,
}

/// The `walker` object of an entry: shared fields plus every variant's extras.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WalkerSection {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_n_dim")]
    pub n_dim: usize,
    #[serde(default)]
    pub magic_gates_placements: Option<Vec<Position>>,
    #[serde(default)]
    pub magic_gates_dests: Option<Vec<Position>>,
    #[serde(default)]
    pub obstacles: Option<Vec<Position>>,
    #[serde(default)]
    pub restart_chance: f64,
    #[serde(default = "default_restart_every")]
    pub restart_every: usize,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_min_step_size")]
    pub min_step_size: f64,
    #[serde(default = "default_max_step_size")]
    pub max_step_size: f64,
    #[serde(default)]
    pub bias_direction: Option<Vec<i64>>,
    #[serde(default)]
    pub bias_strength: f64,
    #[serde(default)]
    pub target: Option<Vec<i64>>,
}

fn default_n_dim() -> usize {
    2
}

fn default_restart_every() -> usize {
    1
}

fn default_min_step_size() -> f64 {
    0.5
}

fn default_max_step_size() -> f64 {
    1.5
}

impl Default for WalkerSection {
    fn default() -> Self {
        Self {
            name: None,
            n_dim: default_n_dim(),
            magic_gates_placements: None,
            magic_gates_dests: None,
            obstacles: None,
            restart_chance: 0.0,
            restart_every: default_restart_every(),
            seed: None,
            min_step_size: default_min_step_size(),
            max_step_size: default_max_step_size(),
            bias_direction: None,
            bias_strength: 0.0,
            target: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationEntry {
    #[serde(rename = "type")]
    pub walker_type: WalkerType,
    pub times_to_run: usize,
    pub number_of_steps: usize,
    #[serde(default)]
    pub walker: WalkerSection,
    pub axis: Vec<f64>,
    pub radius: f64,
}

impl SimulationEntry {
    fn walker_kind(&self) -> ExperimentResult<WalkerKind> {
        let section = &self.walker;
        Ok(match self.walker_type {
            WalkerType::Regular => WalkerKind::angle(),
            WalkerType::Step => {
                WalkerKind::variable_step(section.min_step_size, section.max_step_size)
            }
            WalkerType::Grid => WalkerKind::grid(),
            WalkerType::Biased => {
                WalkerKind::biased(section.bias_direction.clone(), section.bias_strength)
            }
            WalkerType::Searcher => {
                let target = section.target.clone().ok_or_else(|| {
                    ExperimentError::config("a searcher walker requires a `target`")
                })?;
                WalkerKind::searcher(target)
            }
        })
    }

    /// Build the walker named `entry_name` (unless the section overrides the name).
    pub fn build_walker(&self, entry_name: &str) -> ExperimentResult<Walker> {
        let section = &self.walker;
        let name = section.name.clone().unwrap_or_else(|| entry_name.to_string());
        let config = WalkerConfig {
            name: name.clone(),
            n_dim: section.n_dim,
            magic_gates_placements: section.magic_gates_placements.clone(),
            magic_gates_dests: section.magic_gates_dests.clone(),
            obstacles: section.obstacles.clone(),
            restart_chance: section.restart_chance,
            restart_every: section.restart_every,
            seed: section.seed,
        };
        let kind = self.walker_kind()?;
        Walker::new(config, kind).map_err(|source| ExperimentError::walker(&name, source))
    }

    pub fn build_simulation(&self, entry_name: &str) -> ExperimentResult<Simulation> {
        let walker = self.build_walker(entry_name)?;
        Simulation::new(
            self.times_to_run,
            self.number_of_steps,
            walker,
            self.axis.clone(),
            self.radius,
        )
        .map_err(|source| ExperimentError::walker(entry_name, source))
    }
}

/// All simulations of one experiment, keyed and ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExperimentConfig {
    pub simulations: BTreeMap<String, SimulationEntry>,
}

impl ExperimentConfig {
    pub fn from_json_str(json: &str) -> ExperimentResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> ExperimentResult<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let config: Self = serde_json::from_reader(reader)?;
        info!(
            path = %path.display(),
            simulations = config.simulations.len(),
            "configuration loaded"
        );
        Ok(config)
    }

    /// Build every configured simulation, failing on the first invalid entry.
    pub fn build_simulations(&self) -> ExperimentResult<Vec<Simulation>> {
        if self.simulations.is_empty() {
            return Err(ExperimentError::config("no simulations to create"));
        }
        self.simulations
            .iter()
            .map(|(name, entry)| entry.build_simulation(name))
            .collect()
    }
}

#[cfg(test)]
#[path = "config/tests.rs"]
mod tests;
