use std::io::Write;

use crate::error::ExperimentResult;
use crate::metrics::SimulationSummary;

use super::writer_utils::format_vector;

pub(crate) fn export_to_csv_impl(
    summaries: &[SimulationSummary],
    writer: impl Write,
) -> ExperimentResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record([
        "walker_name",
        "walker_type",
        "dim",
        "times_run",
        "steps",
        "radius",
        "axis",
        "avg_dist_origin",
        "avg_dist_axis",
        "avg_step_exited",
        "exited_count",
        "avg_crossings",
    ])?;

    for summary in summaries {
        wtr.write_record([
            summary.walker_name.as_str(),
            summary.walker_type.as_str(),
            &summary.dim.to_string(),
            &summary.times_run.to_string(),
            &summary.steps.to_string(),
            &summary.radius.to_string(),
            &format_vector(&summary.axis),
            &summary.avg_dist_origin.to_string(),
            &summary.avg_dist_axis.to_string(),
            &summary.avg_step_exited.to_string(),
            &summary.exited_count.to_string(),
            &summary.avg_crossings.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
