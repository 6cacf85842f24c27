use thiserror::Error;

/// Failures raised by walker construction and trajectory queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalkError {
    /// Malformed construction parameters. Raised before any state exists.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Bad runtime call parameters (step index, axis, radius, path).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl WalkError {
    pub fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration(reason.into())
    }

    pub fn argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument(reason.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

pub type WalkResult<T> = Result<T, WalkError>;
