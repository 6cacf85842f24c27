use rand::rngs::StdRng;
use rand::Rng;

use crate::error::{WalkError, WalkResult};
use crate::geometry::{normalize_vector, vector_norm, Position};

/// Candidate-step generation for one walker variant.
///
/// `step` proposes the next position from `current` only. Obstacles, magic
/// gates and restarts are applied afterwards by [`Walker::walk`](super::Walker::walk).
pub trait StepPolicy: Send + Sync + std::fmt::Debug {
    /// Check variant parameters against the walker dimension.
    fn validate(&self, _dim: usize) -> WalkResult<()> {
        Ok(())
    }

    fn step(&self, current: &[f64], rng: &mut StdRng) -> Position;
}

/// Moves one unit along a uniformly random direction.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AngleStep;

impl StepPolicy for AngleStep {
    fn step(&self, current: &[f64], rng: &mut StdRng) -> Position {
        advance(current, &random_direction(current.len(), rng), 1.0)
    }
}

/// Moves a uniform random distance in `[min_step_size, max_step_size]` along a random direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariableStep {
    pub min_step_size: f64,
    pub max_step_size: f64,
}

impl Default for VariableStep {
    fn default() -> Self {
        Self {
            min_step_size: 0.5,
            max_step_size: 1.5,
        }
    }
}

impl StepPolicy for VariableStep {
    fn validate(&self, _dim: usize) -> WalkResult<()> {
        if !(self.min_step_size > 0.0 && self.max_step_size > 0.0) {
            return Err(WalkError::config("step sizes must be positive"));
        }
        if !self.max_step_size.is_finite() {
            return Err(WalkError::config("max step size must be finite"));
        }
        if self.min_step_size > self.max_step_size {
            return Err(WalkError::config(
                "min step size must be less than or equal to max step size",
            ));
        }
        Ok(())
    }

    fn step(&self, current: &[f64], rng: &mut StdRng) -> Position {
        let step_size = rng.gen_range(self.min_step_size..=self.max_step_size);
        advance(current, &random_direction(current.len(), rng), step_size)
    }
}

/// Moves one unit forwards or backwards along a single random coordinate axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GridStep;

impl StepPolicy for GridStep {
    fn step(&self, current: &[f64], rng: &mut StdRng) -> Position {
        let mut next = current.to_vec();
        let axis = rng.gen_range(0..current.len());
        let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        next[axis] += sign;
        next
    }
}

/// Moves one unit along a random direction pulled towards a bias.
///
/// The bias is `direction` when set, otherwise it points back at the origin
/// (the negated current position). Directions are blended as
/// `(1 - strength) * random + strength * bias` and renormalised, except at
/// full strength where the bias is used as is.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BiasedStep {
    pub direction: Option<Vec<i64>>,
    pub strength: f64,
}

impl StepPolicy for BiasedStep {
    fn validate(&self, dim: usize) -> WalkResult<()> {
        if let Some(direction) = &self.direction {
            if direction.len() != dim {
                return Err(WalkError::config(format!(
                    "bias direction must have {dim} components, got {}",
                    direction.len()
                )));
            }
            let as_float: Vec<f64> = direction.iter().map(|&c| c as f64).collect();
            if vector_norm(&as_float) != 1.0 {
                return Err(WalkError::config("bias direction must be a unit vector"));
            }
        }
        if !(0.0..=1.0).contains(&self.strength) {
            return Err(WalkError::config("bias strength must be between 0 and 1"));
        }
        Ok(())
    }

    fn step(&self, current: &[f64], rng: &mut StdRng) -> Position {
        let random = random_direction(current.len(), rng);
        let bias: Position = match &self.direction {
            Some(direction) => direction.iter().map(|&c| c as f64).collect(),
            None => current.iter().map(|v| -v).collect(),
        };

        let combined: Position = if self.strength < 1.0 {
            let blended: Position = random
                .iter()
                .zip(&bias)
                .map(|(r, b)| (1.0 - self.strength) * r + self.strength * b)
                .collect();
            let norm = vector_norm(&blended);
            if norm > 0.0 {
                blended.into_iter().map(|v| v / norm).collect()
            } else {
                blended
            }
        } else {
            bias
        };
        advance(current, &combined, 1.0)
    }
}

/// Grid walker that stops moving once it stands on `target`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TargetSeeker {
    pub target: Vec<i64>,
}

impl TargetSeeker {
    fn reached(&self, current: &[f64]) -> bool {
        current.len() == self.target.len()
            && current.iter().zip(&self.target).all(|(&c, &t)| c == t as f64)
    }
}

impl StepPolicy for TargetSeeker {
    fn validate(&self, dim: usize) -> WalkResult<()> {
        if self.target.len() != dim {
            return Err(WalkError::config(format!(
                "target must have {dim} components, got {}",
                self.target.len()
            )));
        }
        Ok(())
    }

    fn step(&self, current: &[f64], rng: &mut StdRng) -> Position {
        if self.reached(current) {
            return current.to_vec();
        }
        GridStep.step(current, rng)
    }
}

/// The closed set of step rules a walker can follow.
#[derive(Debug, Clone, PartialEq)]
pub enum WalkerKind {
    Angle(AngleStep),
    VariableStep(VariableStep),
    Grid(GridStep),
    Biased(BiasedStep),
    Searcher(TargetSeeker),
}

impl WalkerKind {
    pub fn angle() -> Self {
        Self::Angle(AngleStep)
    }

    pub fn variable_step(min_step_size: f64, max_step_size: f64) -> Self {
        Self::VariableStep(VariableStep {
            min_step_size,
            max_step_size,
        })
    }

    pub fn grid() -> Self {
        Self::Grid(GridStep)
    }

    pub fn biased(direction: Option<Vec<i64>>, strength: f64) -> Self {
        Self::Biased(BiasedStep {
            direction,
            strength,
        })
    }

    pub fn searcher(target: Vec<i64>) -> Self {
        Self::Searcher(TargetSeeker { target })
    }

    /// Short name used by configuration files and reports.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Angle(_) => "regular",
            Self::VariableStep(_) => "step",
            Self::Grid(_) => "grid",
            Self::Biased(_) => "biased",
            Self::Searcher(_) => "searcher",
        }
    }

    fn policy(&self) -> &dyn StepPolicy {
        match self {
            Self::Angle(rule) => rule,
            Self::VariableStep(rule) => rule,
            Self::Grid(rule) => rule,
            Self::Biased(rule) => rule,
            Self::Searcher(rule) => rule,
        }
    }
}

impl StepPolicy for WalkerKind {
    fn validate(&self, dim: usize) -> WalkResult<()> {
        self.policy().validate(dim)
    }

    fn step(&self, current: &[f64], rng: &mut StdRng) -> Position {
        self.policy().step(current, rng)
    }
}

fn random_direction(dim: usize, rng: &mut StdRng) -> Position {
    // Walker dimensions are validated to be at least 2 at construction.
    normalize_vector(dim, rng).unwrap_or_else(|_| vec![0.0; dim])
}

fn advance(current: &[f64], direction: &[f64], step_size: f64) -> Position {
    current
        .iter()
        .zip(direction)
        .map(|(c, d)| c + d * step_size)
        .collect()
}
