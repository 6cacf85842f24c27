use std::io::Write;

use walk_core::Simulation;

use crate::error::{ExperimentError, ExperimentResult};

/// Long-format average paths: one row per (simulation, step), `z` empty in 2D.
pub(crate) fn export_avg_paths_csv_impl(
    simulations: &[Simulation],
    writer: impl Write,
) -> ExperimentResult<usize> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["walker_name", "step", "x", "y", "z"])?;

    let mut written = 0;
    for simulation in simulations.iter().filter(|sim| !sim.is_abstract()) {
        let name = simulation.walker_name();
        let avg_path = simulation
            .avg_path()
            .map_err(|source| ExperimentError::walker(name, source))?;

        for (step, point) in avg_path.iter().enumerate() {
            let coord = |axis: usize| point.get(axis).map(|v| v.to_string()).unwrap_or_default();
            wtr.write_record([
                name.to_string(),
                step.to_string(),
                coord(0),
                coord(1),
                coord(2),
            ])?;
        }
        written += 1;
    }

    wtr.flush()?;
    Ok(written)
}
