use std::io::Write;

use crate::error::ExperimentResult;
use crate::metrics::SimulationSummary;

pub(crate) fn export_to_json_impl(
    summaries: &[SimulationSummary],
    mut writer: impl Write,
) -> ExperimentResult<()> {
    serde_json::to_writer_pretty(&mut writer, summaries)?;
    writer.flush()?;
    Ok(())
}
