use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::{ExperimentError, ExperimentResult};

pub(crate) fn ensure_not_empty<T>(items: &[T]) -> ExperimentResult<()> {
    if items.is_empty() {
        return Err(ExperimentError::NoResults);
    }

    Ok(())
}

pub(crate) fn create_output_file(path: impl AsRef<Path>) -> ExperimentResult<BufWriter<File>> {
    Ok(BufWriter::new(File::create(path)?))
}

/// `[0, 1]`-style rendering of a vector, shared by the text and CSV outputs.
pub(crate) fn format_vector(values: &[f64]) -> String {
    let parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", parts.join(", "))
}
