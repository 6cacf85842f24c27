//! Summary extraction from finished simulations.
//!
//! A summary holds the end-of-walk statistics of one simulation: the
//! averages after the final step plus the radius-exit figures.

use serde::Serialize;
use walk_core::{Simulation, WalkError};

use crate::error::{ExperimentError, ExperimentResult};

/// Aggregated statistics of a single simulation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationSummary {
    pub walker_name: String,
    /// Config vocabulary name of the step rule ("regular", "grid", ...).
    pub walker_type: String,
    pub dim: usize,
    /// Completed trials.
    pub times_run: usize,
    pub steps: usize,
    pub radius: f64,
    pub axis: Vec<f64>,
    /// Average distance from the origin after the final step.
    pub avg_dist_origin: f64,
    /// Average distance from `axis` after the final step.
    pub avg_dist_axis: f64,
    /// Average first step outside `radius` (trials that never left count as 0).
    pub avg_step_exited: f64,
    /// Trials that left `radius` at some point.
    pub exited_count: usize,
    /// Average y-axis crossings up to the final step.
    pub avg_crossings: f64,
}

/// Extract the summary of a simulation that has been run.
///
/// # Errors
///
/// Fails when the simulation has no completed trials.
pub fn extract_summary(simulation: &Simulation) -> ExperimentResult<SimulationSummary> {
    let name = simulation.walker_name();
    let steps = simulation.num_of_steps();
    let tag = |source: WalkError| ExperimentError::walker(name, source);

    Ok(SimulationSummary {
        walker_name: name.to_string(),
        walker_type: simulation.walker().kind().type_name().to_string(),
        dim: simulation.dim(),
        times_run: simulation.times_run(),
        steps,
        radius: simulation.radius(),
        axis: simulation.axis().to_vec(),
        avg_dist_origin: simulation.avg_dist_from_origin_after(steps).map_err(tag)?,
        avg_dist_axis: simulation.avg_dist_from_axis_after(steps).map_err(tag)?,
        avg_step_exited: simulation.avg_step_exited_radius().map_err(tag)?,
        exited_count: simulation.steps_exited_radius().map_err(tag)?.len(),
        avg_crossings: simulation
            .avg_times_crossed_y_axis_after(steps)
            .map_err(tag)?,
    })
}

/// Summaries of every simulation, in order.
pub fn extract_summaries(simulations: &[Simulation]) -> ExperimentResult<Vec<SimulationSummary>> {
    simulations.iter().map(extract_summary).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use walk_core::test_helpers::{grid_walker, test_simulation};

    #[test]
    fn test_extract_summary_after_run() {
        let mut sim = test_simulation(6, 30, grid_walker("G"), 3.0);
        sim.run();
        let summary = extract_summary(&sim).unwrap();

        assert_eq!(summary.walker_name, "G");
        assert_eq!(summary.walker_type, "grid");
        assert_eq!(summary.dim, 2);
        assert_eq!(summary.times_run, 6);
        assert_eq!(summary.steps, 30);
        assert_eq!(summary.axis, vec![0.0, 1.0]);
        assert!(summary.avg_dist_origin >= 0.0);
        assert!(summary.avg_dist_axis >= 0.0);
        assert!(summary.exited_count <= 6);
        assert!(summary.avg_crossings >= 0.0);
    }

    #[test]
    fn test_extract_summary_before_run_fails() {
        let sim = test_simulation(2, 5, grid_walker("idle"), 3.0);
        match extract_summary(&sim) {
            Err(ExperimentError::Walker { name, .. }) => assert_eq!(name, "idle"),
            other => panic!("expected walker error, got {other:?}"),
        }
    }
}
