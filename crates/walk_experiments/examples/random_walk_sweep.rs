//! Example: sweep step counts for a grid walker and compare end-of-walk statistics.
//!
//! This example demonstrates how to:
//! 1. Build walkers and simulations directly from walk_core
//! 2. Run them in parallel
//! 3. Extract summaries and export them to CSV/JSON

use walk_core::{Simulation, Walker, WalkerConfig, WalkerKind};
use walk_experiments::{
    export_to_csv, export_to_json, extract_summaries, run_parallel_simulations,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Starting random walk sweep...");

    let step_counts = [10, 50, 100, 500, 1000];
    let mut simulations = Vec::with_capacity(step_counts.len());
    for (idx, steps) in step_counts.iter().enumerate() {
        let config = WalkerConfig::new(format!("grid-{steps}"))
            .with_seed(idx as u64)
            .with_obstacles(vec![vec![2.0, 2.0], vec![-2.0, -2.0]]);
        let walker = Walker::new(config, WalkerKind::grid())?;
        simulations.push(Simulation::new(500, *steps, walker, vec![0.0, 1.0], 10.0)?);
    }

    let simulations = run_parallel_simulations(simulations, None)?;
    let summaries = extract_summaries(&simulations)?;

    println!("\n=== Results ===");
    for summary in &summaries {
        println!(
            "{:>10}: origin {:.3}, axis {:.3}, exited {}/{} (avg step {:.1}), crossings {:.2}",
            summary.walker_name,
            summary.avg_dist_origin,
            summary.avg_dist_axis,
            summary.exited_count,
            summary.times_run,
            summary.avg_step_exited,
            summary.avg_crossings,
        );
    }

    export_to_csv(&summaries, "random_walk_sweep.csv")?;
    export_to_json(&summaries, "random_walk_sweep.json")?;
    println!("\nResults exported to random_walk_sweep.csv and random_walk_sweep.json");

    Ok(())
}
