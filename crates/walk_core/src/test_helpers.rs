//! Test helpers for common walker and simulation setup.
//!
//! Every helper seeds its walker so tests and benchmarks are reproducible.

use crate::geometry::Position;
use crate::simulation::Simulation;
use crate::walker::{Walker, WalkerConfig, WalkerKind};

/// Seed shared by the fixtures below.
pub const TEST_SEED: u64 = 0x5eed;

/// Two-dimensional config named `name` with the fixture seed.
pub fn test_config(name: &str) -> WalkerConfig {
    WalkerConfig::new(name).with_seed(TEST_SEED)
}

/// Build a walker from `config` and `kind`.
///
/// # Panics
///
/// Panics if the configuration is invalid.
pub fn test_walker(config: WalkerConfig, kind: WalkerKind) -> Walker {
    Walker::new(config, kind).expect("test walker configuration should be valid")
}

pub fn angle_walker(name: &str) -> Walker {
    test_walker(test_config(name), WalkerKind::angle())
}

pub fn grid_walker(name: &str) -> Walker {
    test_walker(test_config(name), WalkerKind::grid())
}

/// Simulation over a 2D walker with the y axis and the given radius.
///
/// # Panics
///
/// Panics if the run parameters are invalid.
pub fn test_simulation(times_to_run: usize, steps: usize, walker: Walker, radius: f64) -> Simulation {
    Simulation::new(times_to_run, steps, walker, vec![0.0, 1.0], radius)
        .expect("test simulation parameters should be valid")
}

/// A straight walk along the x axis: `[0,0], [1,0], ..., [len-1,0]`.
pub fn straight_path(len: usize) -> Vec<Position> {
    (0..len).map(|x| vec![x as f64, 0.0]).collect()
}
