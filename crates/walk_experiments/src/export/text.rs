use std::io::Write;

use crate::error::ExperimentResult;
use crate::metrics::SimulationSummary;

use super::writer_utils::format_vector;

pub(crate) fn export_text_report_impl(
    summaries: &[SimulationSummary],
    mut writer: impl Write,
) -> ExperimentResult<()> {
    for summary in summaries {
        writer.write_all(render_block(summary).as_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

/// One report block: a header line followed by the four averaged statistics.
///
/// Floats keep their decimal point (`31.0`, not `31`).
pub fn render_block(summary: &SimulationSummary) -> String {
    let steps = summary.steps;
    format!(
        "Results for {name}:\n {steps} steps and {runs} runs:\n\
         Average distance from origin after {steps} steps: {origin:?}\n\
         Average distance from {axis} axis after {steps} steps: {axis_dist:?}\n\
         Average step at which the walker exited the {radius:?} radius: {exited:?}\n\
         Average number of times the walker crossed the y-axis: {crossings:?}\n",
        name = summary.walker_name,
        runs = summary.times_run,
        origin = summary.avg_dist_origin,
        axis = format_vector(&summary.axis),
        axis_dist = summary.avg_dist_axis,
        radius = summary.radius,
        exited = summary.avg_step_exited,
        crossings = summary.avg_crossings,
    )
}
