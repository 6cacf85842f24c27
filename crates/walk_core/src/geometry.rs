//! Vector helpers shared by the step rules and the trajectory metrics.

use rand::Rng;
use rand_distr::StandardNormal;

use crate::error::{WalkError, WalkResult};

/// A point in the walk space.
pub type Position = Vec<f64>;

/// Ordered list of visited positions, starting at the origin.
pub type Trajectory = Vec<Position>;

pub fn vector_norm(vec: &[f64]) -> f64 {
    vec.iter().map(|v| v * v).sum::<f64>().sqrt()
}

pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

pub fn origin(dim: usize) -> Position {
    vec![0.0; dim]
}

/// Sample a uniformly distributed direction on the unit sphere of `dim` space.
///
/// Gaussian components normalised to unit length are isotropic, so the
/// result is uniform over directions.
pub fn normalize_vector<R: Rng + ?Sized>(dim: usize, rng: &mut R) -> WalkResult<Position> {
    if dim <= 1 {
        return Err(WalkError::argument(
            "number of dimensions must be greater than 1",
        ));
    }
    loop {
        let direction: Position = (0..dim).map(|_| rng.sample::<f64, _>(StandardNormal)).collect();
        let norm = vector_norm(&direction);
        // An all-zero draw has no direction; draw again.
        if norm > 0.0 {
            return Ok(direction.into_iter().map(|v| v / norm).collect());
        }
    }
}

/// True when `position` lies strictly outside the ball of `radius` around the origin.
pub fn exited_radius(position: &[f64], radius: f64) -> WalkResult<bool> {
    if radius <= 0.0 {
        return Err(WalkError::argument("radius must be positive"));
    }
    Ok(radius < vector_norm(position))
}
