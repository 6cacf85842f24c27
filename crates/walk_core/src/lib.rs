//! Random-walk simulation core.
//!
//! - [`geometry`]: direction sampling and radius tests
//! - [`spatial`]: point-set lookups for obstacles and magic gates
//! - [`walker`]: trajectory ownership and the step rules
//! - [`metrics`]: per-trajectory statistics
//! - [`simulation`]: repeated trials and cross-trial averages

pub mod error;
pub mod geometry;
pub mod metrics;
pub mod simulation;
pub mod spatial;
pub mod walker;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;

pub use error::{WalkError, WalkResult};
pub use geometry::{exited_radius, normalize_vector, Position, Trajectory};
pub use simulation::Simulation;
pub use walker::{StepPolicy, Walker, WalkerConfig, WalkerKind};
