use std::fs::File;
use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, StringArray, UInt64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::file::properties::WriterProperties;

use crate::error::ExperimentResult;
use crate::metrics::SimulationSummary;

use super::writer_utils::format_vector;

pub(crate) fn export_to_parquet_impl(
    summaries: &[SimulationSummary],
    file: File,
) -> ExperimentResult<()> {
    let batch = build_record_batch(summaries)?;
    let props = WriterProperties::builder().build();
    let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props))?;
    writer.write(&batch)?;
    writer.close()?;

    Ok(())
}

fn build_record_batch(
    summaries: &[SimulationSummary],
) -> Result<RecordBatch, arrow::error::ArrowError> {
    let schema = Arc::new(parquet_schema());
    let arrays = build_arrays(summaries);

    RecordBatch::try_new(schema, arrays)
}

fn parquet_schema() -> Schema {
    Schema::new(vec![
        Field::new("walker_name", DataType::Utf8, false),
        Field::new("walker_type", DataType::Utf8, false),
        Field::new("dim", DataType::UInt64, false),
        Field::new("times_run", DataType::UInt64, false),
        Field::new("steps", DataType::UInt64, false),
        Field::new("radius", DataType::Float64, false),
        Field::new("axis", DataType::Utf8, false),
        Field::new("avg_dist_origin", DataType::Float64, false),
        Field::new("avg_dist_axis", DataType::Float64, false),
        Field::new("avg_step_exited", DataType::Float64, false),
        Field::new("exited_count", DataType::UInt64, false),
        Field::new("avg_crossings", DataType::Float64, false),
    ])
}

fn build_arrays(summaries: &[SimulationSummary]) -> Vec<ArrayRef> {
    let counts = |f: fn(&SimulationSummary) -> usize| -> ArrayRef {
        Arc::new(UInt64Array::from(
            summaries.iter().map(|s| f(s) as u64).collect::<Vec<_>>(),
        ))
    };
    let floats = |f: fn(&SimulationSummary) -> f64| -> ArrayRef {
        Arc::new(Float64Array::from(
            summaries.iter().map(f).collect::<Vec<_>>(),
        ))
    };

    vec![
        Arc::new(StringArray::from(
            summaries
                .iter()
                .map(|s| s.walker_name.clone())
                .collect::<Vec<_>>(),
        )),
        Arc::new(StringArray::from(
            summaries
                .iter()
                .map(|s| s.walker_type.clone())
                .collect::<Vec<_>>(),
        )),
        counts(|s| s.dim),
        counts(|s| s.times_run),
        counts(|s| s.steps),
        floats(|s| s.radius),
        Arc::new(StringArray::from(
            summaries
                .iter()
                .map(|s| format_vector(&s.axis))
                .collect::<Vec<_>>(),
        )),
        floats(|s| s.avg_dist_origin),
        floats(|s| s.avg_dist_axis),
        floats(|s| s.avg_step_exited),
        counts(|s| s.exited_count),
        floats(|s| s.avg_crossings),
    ]
}
