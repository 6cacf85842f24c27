//! Parallel simulation execution using rayon.
//!
//! Simulations own their walker and RNG, so each one runs to completion on a
//! pool thread with no shared state.

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::info;
use walk_core::Simulation;

use crate::error::{ExperimentError, ExperimentResult};

/// Run one simulation to completion and hand it back.
pub fn run_single_simulation(mut simulation: Simulation) -> Simulation {
    simulation.run();
    simulation
}

/// Run every simulation in parallel, with a progress bar.
///
/// Results come back in the same order as `simulations`.
pub fn run_parallel_simulations(
    simulations: Vec<Simulation>,
    num_threads: Option<usize>,
) -> ExperimentResult<Vec<Simulation>> {
    run_parallel_simulations_with_progress(simulations, num_threads, true)
}

/// Run every simulation in parallel with an optional progress bar.
///
/// # Arguments
///
/// * `simulations` - Simulations to run; each is consumed and returned after running
/// * `num_threads` - Optional number of threads to use. If None, uses rayon's default.
/// * `show_progress` - Whether to display a progress bar
///
/// # Errors
///
/// Fails if the thread pool cannot be built or the progress template is invalid.
pub fn run_parallel_simulations_with_progress(
    simulations: Vec<Simulation>,
    num_threads: Option<usize>,
    show_progress: bool,
) -> ExperimentResult<Vec<Simulation>> {
    let total = simulations.len();
    let pb = if show_progress && total > 0 {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
                )
                .map_err(|error| ExperimentError::Progress(error.to_string()))?
                .progress_chars("#>-"),
        );
        Some(bar)
    } else {
        None
    };

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(threads) = num_threads {
        builder = builder.num_threads(threads);
    }
    let pool = builder.build()?;
    info!(
        simulations = total,
        threads = pool.current_num_threads(),
        "running simulations"
    );

    let pb_clone = pb.clone();
    let results: Vec<Simulation> = pool.install(|| {
        simulations
            .into_par_iter()
            .map(|simulation| {
                let finished = run_single_simulation(simulation);
                if let Some(ref progress_bar) = pb_clone {
                    progress_bar.inc(1);
                }
                finished
            })
            .collect()
    });

    if let Some(ref progress_bar) = pb {
        progress_bar.finish_with_message("Completed");
    }

    Ok(results)
}
