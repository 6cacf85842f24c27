use thiserror::Error;
use walk_core::WalkError;

#[derive(Error, Debug)]
pub enum ExperimentError {
    #[error("Walker error in '{name}': {source}")]
    Walker {
        name: String,
        #[source]
        source: WalkError,
    },

    #[error(transparent)]
    Walk(#[from] WalkError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Progress bar error: {0}")]
    Progress(String),

    #[error("No results to export")]
    NoResults,
}

impl ExperimentError {
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config(reason.into())
    }

    pub(crate) fn walker(name: &str, source: WalkError) -> Self {
        Self::Walker {
            name: name.to_string(),
            source,
        }
    }
}

pub type ExperimentResult<T> = Result<T, ExperimentError>;
