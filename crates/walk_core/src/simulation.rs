//! Simulation: repeated independent trials of one walker configuration.
//!
//! Each trial hard-restarts the walker, walks `num_of_steps` steps and stores
//! the finished trajectory. Statistics are computed per stored trajectory with
//! the functions in [`crate::metrics`] and averaged across trials.

use tracing::{debug, warn};

use crate::error::{WalkError, WalkResult};
use crate::geometry::{Position, Trajectory};
use crate::metrics;
use crate::walker::Walker;

#[derive(Debug, Clone)]
pub struct Simulation {
    times_to_run: usize,
    num_of_steps: usize,
    walker: Walker,
    axis: Vec<f64>,
    radius: f64,
    /// Completed trajectories, in run order
    sims: Vec<Trajectory>,
}

impl Simulation {
    pub fn new(
        times_to_run: usize,
        num_of_steps: usize,
        walker: Walker,
        axis: Vec<f64>,
        radius: f64,
    ) -> WalkResult<Self> {
        if times_to_run == 0 {
            return Err(WalkError::argument("times to run must be greater than 0"));
        }
        if num_of_steps == 0 {
            return Err(WalkError::argument("number of steps must be greater than 0"));
        }
        if radius.is_nan() || radius <= 0.0 {
            return Err(WalkError::argument("radius to check must be greater than 0"));
        }
        if axis.is_empty() {
            return Err(WalkError::argument("axis to check must not be empty"));
        }
        if axis.len() != walker.dim() {
            return Err(WalkError::argument(format!(
                "axis to check must have {} components, got {}",
                walker.dim(),
                axis.len()
            )));
        }
        if walker.restart_every() > num_of_steps {
            return Err(WalkError::argument(
                "number of steps must be greater than or equal to the restart-every value",
            ));
        }

        Ok(Self {
            times_to_run,
            num_of_steps,
            walker,
            axis,
            radius,
            sims: Vec::with_capacity(times_to_run),
        })
    }

    /// Run every trial, appending one trajectory per completed trial.
    ///
    /// A trial rejected by the walker stops the loop; trajectories recorded
    /// before it are kept.
    pub fn run(&mut self) {
        for trial in 0..self.times_to_run {
            self.walker.hard_restart();
            if let Err(error) = self.walker.walk(self.num_of_steps) {
                warn!(
                    walker = %self.walker.name(),
                    trial,
                    %error,
                    "aborting simulation run early"
                );
                break;
            }
            self.sims.push(self.walker.path());
        }
        debug!(
            walker = %self.walker.name(),
            trials = self.sims.len(),
            steps = self.num_of_steps,
            "simulation finished"
        );
    }

    /// Apply a per-trajectory metric to every stored trial.
    fn apply_to_sims<T>(
        &self,
        metric: impl Fn(&[Position]) -> WalkResult<T>,
    ) -> WalkResult<Vec<T>> {
        self.sims.iter().map(|path| metric(path.as_slice())).collect()
    }

    pub fn walker_name(&self) -> &str {
        self.walker.name()
    }

    pub fn walker(&self) -> &Walker {
        &self.walker
    }

    pub fn sims(&self) -> Vec<Trajectory> {
        self.sims.clone()
    }

    /// Dimension count above 3 leaves no drawable path.
    pub fn is_abstract(&self) -> bool {
        self.walker.dim() > 3
    }

    pub fn num_of_steps(&self) -> usize {
        self.num_of_steps
    }

    pub fn times_to_run(&self) -> usize {
        self.times_to_run
    }

    /// Number of completed trials.
    pub fn times_run(&self) -> usize {
        self.sims.len()
    }

    pub fn dim(&self) -> usize {
        self.walker.dim()
    }

    pub fn axis(&self) -> &[f64] {
        &self.axis
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn distances_from_origin_after(&self, n: usize) -> WalkResult<Vec<f64>> {
        self.apply_to_sims(|path| metrics::dist_from_origin_after(path, n))
    }

    pub fn avg_dist_from_origin_after(&self, n: usize) -> WalkResult<f64> {
        mean(&self.distances_from_origin_after(n)?)
    }

    pub fn distances_from_axis_after(&self, n: usize) -> WalkResult<Vec<f64>> {
        self.apply_to_sims(|path| metrics::dist_from_axis_after(path, &self.axis, n))
    }

    pub fn avg_dist_from_axis_after(&self, n: usize) -> WalkResult<f64> {
        mean(&self.distances_from_axis_after(n)?)
    }

    pub fn times_crossed_y_axis_after(&self, n: usize) -> WalkResult<Vec<usize>> {
        self.apply_to_sims(|path| metrics::times_crossed_y_axis_after(path, n))
    }

    pub fn avg_times_crossed_y_axis_after(&self, n: usize) -> WalkResult<f64> {
        let counts: Vec<f64> = self
            .times_crossed_y_axis_after(n)?
            .into_iter()
            .map(|count| count as f64)
            .collect();
        mean(&counts)
    }

    /// Mean first-exit step across trials. Trials that never left count as 0.
    pub fn avg_step_exited_radius(&self) -> WalkResult<f64> {
        let steps: Vec<f64> = self
            .apply_to_sims(|path| metrics::exited_radius_at(path, self.radius))?
            .into_iter()
            .map(|step| step.unwrap_or(0) as f64)
            .collect();
        mean(&steps)
    }

    /// First-exit steps of the trials that did leave the radius.
    pub fn steps_exited_radius(&self) -> WalkResult<Vec<usize>> {
        let steps = self.apply_to_sims(|path| metrics::exited_radius_at(path, self.radius))?;
        Ok(steps.into_iter().flatten().collect())
    }

    /// Coordinate-wise mean position for step indices `0..num_of_steps`.
    ///
    /// Each index is averaged over the trials whose trajectory reaches it.
    pub fn avg_path(&self) -> WalkResult<Vec<Position>> {
        if self.sims.is_empty() {
            return Err(WalkError::argument("no simulations have been run"));
        }
        let dim = self.walker.dim();
        let mut totals = vec![vec![0.0; dim]; self.num_of_steps];
        let mut counts = vec![0usize; self.num_of_steps];

        for path in &self.sims {
            for (idx, point) in path.iter().take(self.num_of_steps).enumerate() {
                for (total, coord) in totals[idx].iter_mut().zip(point) {
                    *total += coord;
                }
                counts[idx] += 1;
            }
        }

        Ok(totals
            .into_iter()
            .zip(counts)
            .map(|(total, count)| {
                if count == 0 {
                    total
                } else {
                    total.into_iter().map(|v| v / count as f64).collect()
                }
            })
            .collect())
    }
}

fn mean(values: &[f64]) -> WalkResult<f64> {
    if values.is_empty() {
        return Err(WalkError::argument("no simulations have been run"));
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}
