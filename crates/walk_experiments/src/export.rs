//! Result export utilities.
//!
//! Summaries can be written as JSON, CSV, Parquet or a plain-text report.
//! Average paths of drawable (2D/3D) simulations go to a long-format CSV for
//! external plotting.

use std::fs::File;
use std::path::Path;

use tracing::info;
use walk_core::Simulation;

use crate::error::ExperimentResult;
use crate::metrics::SimulationSummary;

#[path = "export/csv.rs"]
mod csv;
#[path = "export/json.rs"]
mod json;
#[path = "export/parquet.rs"]
mod parquet;
#[path = "export/paths.rs"]
mod paths;
#[path = "export/text.rs"]
mod text;
#[path = "export/writer_utils.rs"]
mod writer_utils;

pub use text::render_block as render_report_block;

/// Export summaries to Parquet format, one row per simulation.
///
/// # Errors
///
/// Returns an error if `summaries` is empty or file creation or Parquet writing fails.
pub fn export_to_parquet(
    summaries: &[SimulationSummary],
    path: impl AsRef<Path>,
) -> ExperimentResult<()> {
    writer_utils::ensure_not_empty(summaries)?;
    let path = path.as_ref();
    parquet::export_to_parquet_impl(summaries, File::create(path)?)?;
    info!(path = %path.display(), rows = summaries.len(), "parquet summary written");
    Ok(())
}

/// Export summaries to a JSON array.
///
/// # Errors
///
/// Returns an error if `summaries` is empty or file creation or JSON serialization fails.
pub fn export_to_json(
    summaries: &[SimulationSummary],
    path: impl AsRef<Path>,
) -> ExperimentResult<()> {
    writer_utils::ensure_not_empty(summaries)?;
    let path = path.as_ref();
    json::export_to_json_impl(summaries, writer_utils::create_output_file(path)?)?;
    info!(path = %path.display(), rows = summaries.len(), "json summary written");
    Ok(())
}

/// Export summaries to CSV, one row per simulation.
///
/// # Errors
///
/// Returns an error if `summaries` is empty or file creation or CSV writing fails.
pub fn export_to_csv(
    summaries: &[SimulationSummary],
    path: impl AsRef<Path>,
) -> ExperimentResult<()> {
    writer_utils::ensure_not_empty(summaries)?;
    let path = path.as_ref();
    csv::export_to_csv_impl(summaries, writer_utils::create_output_file(path)?)?;
    info!(path = %path.display(), rows = summaries.len(), "csv summary written");
    Ok(())
}

/// Write the human-readable statistics report.
///
/// Each simulation gets a "Results for <name>" header followed by its
/// distance, radius-exit and crossing averages.
///
/// # Errors
///
/// Returns an error if `summaries` is empty or the file cannot be written.
pub fn export_text_report(
    summaries: &[SimulationSummary],
    path: impl AsRef<Path>,
) -> ExperimentResult<()> {
    writer_utils::ensure_not_empty(summaries)?;
    let path = path.as_ref();
    text::export_text_report_impl(summaries, writer_utils::create_output_file(path)?)?;
    info!(path = %path.display(), simulations = summaries.len(), "text report written");
    Ok(())
}

/// Export the average path of every non-abstract simulation.
///
/// Columns are `walker_name, step, x, y, z`; `z` is empty for 2D walkers.
/// Returns the number of simulations written.
///
/// # Errors
///
/// Returns an error if `simulations` is empty, a drawable simulation has no
/// completed trials, or writing fails.
pub fn export_avg_paths_csv(
    simulations: &[Simulation],
    path: impl AsRef<Path>,
) -> ExperimentResult<usize> {
    writer_utils::ensure_not_empty(simulations)?;
    let path = path.as_ref();
    let written = paths::export_avg_paths_csv_impl(
        simulations,
        writer_utils::create_output_file(path)?,
    )?;
    info!(path = %path.display(), simulations = written, "average paths written");
    Ok(written)
}
