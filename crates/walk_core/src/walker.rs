//! Walker: a single trajectory advanced one step at a time.
//!
//! A walker pairs a step rule ([`WalkerKind`]) with the constraints shared
//! by every rule:
//!
//! - **Obstacles**: candidates within unit distance of an obstacle are redrawn
//! - **Magic gates**: landing exactly on a placement teleports to a random destination
//! - **Restarts**: every `restart_every`-th step may send the walker back to the origin
//!
//! The trajectory always starts at the origin and grows by exactly one point
//! per step. Restarts move the cursor but keep the history.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::error::{WalkError, WalkResult};
use crate::geometry::{origin, Position, Trajectory};
use crate::metrics;
use crate::spatial::{MagicGates, PointIndex};

#[path = "walker/step_rules.rs"]
mod step_rules;

pub use step_rules::{
    AngleStep, BiasedStep, GridStep, StepPolicy, TargetSeeker, VariableStep, WalkerKind,
};

/// Candidates within this distance of an obstacle are rejected.
pub const OBSTACLE_CLEARANCE: f64 = 1.0;

/// Construction record shared by all walker variants.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkerConfig {
    pub name: String,
    pub n_dim: usize,
    pub magic_gates_placements: Option<Vec<Position>>,
    pub magic_gates_dests: Option<Vec<Position>>,
    pub obstacles: Option<Vec<Position>>,
    /// Probability in [0, 1] of returning to the origin on an eligible step.
    pub restart_chance: f64,
    /// Restarts are rolled on every step whose 0-based index is a multiple of this.
    pub restart_every: usize,
    /// Fixed RNG seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl WalkerConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            n_dim: 2,
            magic_gates_placements: None,
            magic_gates_dests: None,
            obstacles: None,
            restart_chance: 0.0,
            restart_every: 1,
            seed: None,
        }
    }

    pub fn with_dim(mut self, n_dim: usize) -> Self {
        self.n_dim = n_dim;
        self
    }

    pub fn with_obstacles(mut self, obstacles: Vec<Position>) -> Self {
        self.obstacles = Some(obstacles);
        self
    }

    pub fn with_magic_gates(mut self, placements: Vec<Position>, destinations: Vec<Position>) -> Self {
        self.magic_gates_placements = Some(placements);
        self.magic_gates_dests = Some(destinations);
        self
    }

    pub fn with_restart(mut self, restart_chance: f64, restart_every: usize) -> Self {
        self.restart_chance = restart_chance;
        self.restart_every = restart_every;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn validate(&self) -> WalkResult<()> {
        if self.name.is_empty() {
            return Err(WalkError::config("name must not be empty"));
        }
        if self.n_dim <= 1 {
            return Err(WalkError::config(
                "number of dimensions must be greater than 1",
            ));
        }
        if let Some(obstacles) = &self.obstacles {
            validate_vectors("obstacle", obstacles, self.n_dim)?;
        }
        self.validate_gates()?;
        if !(0.0..=1.0).contains(&self.restart_chance) {
            return Err(WalkError::config("restart chance must be between 0 and 1"));
        }
        if self.restart_every < 1 {
            return Err(WalkError::config("restart-every must be positive"));
        }
        Ok(())
    }

    fn validate_gates(&self) -> WalkResult<()> {
        match (&self.magic_gates_placements, &self.magic_gates_dests) {
            (None, None) => Ok(()),
            (Some(placements), Some(dests)) if placements.is_empty() == dests.is_empty() => {
                validate_vectors("magic gate placement", placements, self.n_dim)?;
                validate_vectors("magic gate destination", dests, self.n_dim)
            }
            (Some(placements), _) if !placements.is_empty() => Err(WalkError::config(
                "magic gate destinations must be provided if magic gate placements are provided",
            )),
            _ => Err(WalkError::config(
                "magic gate placements must be provided if magic gate destinations are provided",
            )),
        }
    }
}

fn validate_vectors(label: &str, vectors: &[Position], n_dim: usize) -> WalkResult<()> {
    for vector in vectors {
        if vector.len() != n_dim {
            return Err(WalkError::config(format!(
                "{label} {vector:?} must have {n_dim} components"
            )));
        }
        if !vector.iter().all(|v| v.is_finite()) {
            return Err(WalkError::config(format!(
                "{label} {vector:?} must contain only finite numbers"
            )));
        }
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct Walker {
    name: String,
    dim: usize,
    kind: WalkerKind,
    obstacles: Option<PointIndex>,
    gates: Option<MagicGates>,
    restart_chance: f64,
    restart_every: usize,
    current_position: Position,
    path: Trajectory,
    rng: StdRng,
}

impl Walker {
    /// Validate `config` and `kind`, then place the walker at the origin.
    pub fn new(config: WalkerConfig, kind: WalkerKind) -> WalkResult<Self> {
        config.validate()?;
        kind.validate(config.n_dim)?;

        let WalkerConfig {
            name,
            n_dim,
            magic_gates_placements,
            magic_gates_dests,
            obstacles,
            restart_chance,
            restart_every,
            seed,
        } = config;

        let obstacles = obstacles
            .filter(|points| !points.is_empty())
            .map(PointIndex::new);
        let gates = match (magic_gates_placements, magic_gates_dests) {
            (Some(placements), Some(dests)) if !placements.is_empty() => {
                Some(MagicGates::new(placements, dests))
            }
            _ => None,
        };
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            name,
            dim: n_dim,
            kind,
            obstacles,
            gates,
            restart_chance,
            restart_every,
            current_position: origin(n_dim),
            path: vec![origin(n_dim)],
            rng,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn kind(&self) -> &WalkerKind {
        &self.kind
    }

    pub fn restart_every(&self) -> usize {
        self.restart_every
    }

    pub fn restart_chance(&self) -> f64 {
        self.restart_chance
    }

    /// Standard basis of the walk space.
    pub fn basis_vectors(&self) -> Vec<Position> {
        (0..self.dim)
            .map(|axis| {
                let mut vector = origin(self.dim);
                vector[axis] = 1.0;
                vector
            })
            .collect()
    }

    /// Propose the next position without applying obstacles, gates or restarts.
    pub fn step(&mut self) -> Position {
        self.kind.step(&self.current_position, &mut self.rng)
    }

    /// Advance the trajectory by `steps` points.
    ///
    /// Obstacle rejection redraws until the candidate is clear. A walker boxed
    /// in by obstacles on every side never returns.
    pub fn walk(&mut self, steps: usize) -> WalkResult<()> {
        if steps == 0 {
            return Err(WalkError::argument("number of steps must be positive"));
        }
        self.path.reserve(steps);

        for i in 0..steps {
            let mut candidate = self.kind.step(&self.current_position, &mut self.rng);

            if let Some(obstacles) = &self.obstacles {
                while obstacles.any_within(&candidate, OBSTACLE_CLEARANCE) {
                    candidate = self.kind.step(&self.current_position, &mut self.rng);
                }
            }

            if let Some(gates) = &self.gates {
                if gates.is_gate(&candidate) {
                    if let Some(destination) = gates.destinations().choose(&mut self.rng) {
                        trace!(walker = %self.name, step = i, ?destination, "magic gate teleport");
                        candidate = destination.clone();
                    }
                }
            }

            if i % self.restart_every == 0 && self.rng.gen::<f64>() < self.restart_chance {
                trace!(walker = %self.name, step = i, "restart to origin");
                candidate = self.restart();
            }

            self.current_position.clone_from(&candidate);
            self.path.push(candidate);
        }
        Ok(())
    }

    /// Move the cursor back to the origin, keeping the trajectory.
    pub fn restart(&mut self) -> Position {
        self.current_position = origin(self.dim);
        self.current_position.clone()
    }

    /// Reset both cursor and trajectory to the single-origin state.
    pub fn hard_restart(&mut self) -> Position {
        self.current_position = origin(self.dim);
        self.path = vec![origin(self.dim)];
        self.current_position.clone()
    }

    pub fn path(&self) -> Trajectory {
        self.path.clone()
    }

    pub fn current_position(&self) -> Position {
        self.current_position.clone()
    }

    /// Replace the trajectory wholesale; the cursor moves to its last point.
    pub fn set_path(&mut self, path: Trajectory) -> WalkResult<()> {
        let Some(last) = path.last() else {
            return Err(WalkError::argument("path must not be empty"));
        };
        if let Some(point) = path.iter().find(|point| point.len() != self.dim) {
            return Err(WalkError::argument(format!(
                "path point {point:?} must have {} components",
                self.dim
            )));
        }
        self.current_position = last.clone();
        self.path = path;
        Ok(())
    }

    pub fn dist_from_origin_after(&self, n: usize) -> WalkResult<f64> {
        metrics::dist_from_origin_after(&self.path, n)
    }

    pub fn dist_from_axis_after(&self, axis: &[f64], n: usize) -> WalkResult<f64> {
        metrics::dist_from_axis_after(&self.path, axis, n)
    }

    pub fn times_crossed_y_axis_after(&self, n: usize) -> WalkResult<usize> {
        metrics::times_crossed_y_axis_after(&self.path, n)
    }

    /// First step index outside `radius`, `None` if the walker never left.
    pub fn exited_radius_at(&self, radius: f64) -> WalkResult<Option<usize>> {
        metrics::exited_radius_at(&self.path, radius)
    }
}
